//! In-memory event collection.
//!
//! The store is the single source of truth for a session: the codec fills
//! it at startup, the presentation layer mutates it, and the codec writes
//! it back out wholesale on save.

use crate::event::Event;

/// Insertion-ordered collection of events with id generation.
///
/// `next_id` is always greater than any id this store has handed out.
/// `add` does not check for duplicate ids; loaded files are trusted and
/// `delete` removes the first match only.
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u32,
}

impl Default for EventStore {
    fn default() -> Self {
        EventStore::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        EventStore {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Hand out the next id and advance the counter.
    pub fn generate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// All events, in insertion order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Remove the first event with this id. Returns whether one existed.
    pub fn delete(&mut self, id: u32) -> bool {
        match self.events.iter().position(|e| e.id == id) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    /// Restore the id counter, typically to max(loaded ids) + 1 after a
    /// successful load.
    pub fn set_next_id(&mut self, id: u32) {
        self.next_id = id;
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
