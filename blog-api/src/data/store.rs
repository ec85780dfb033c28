use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{Comment, Post, User};

/// Anything that can live in a [`Collection`].
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> Uuid;
}

impl Record for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Comment {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Storage capability set used by the repositories. Implementations must
/// yield records from `scan` in insertion order.
pub trait Collection<T: Record>: Send + Sync {
    fn get(&self, id: Uuid) -> Option<&T>;
    fn get_mut(&mut self, id: Uuid) -> Option<&mut T>;
    /// Inserts a new record or replaces the one with the same id in place.
    fn put(&mut self, record: T);
    fn delete(&mut self, id: Uuid) -> Option<T>;
    fn scan(&self) -> Box<dyn Iterator<Item = &T> + '_>;
    fn len(&self) -> usize;

    fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Arena of records plus an id index. Deleted slots are left empty so the
/// surviving records keep their relative order.
pub struct InMemoryCollection<T> {
    slots: Vec<Option<T>>,
    index: HashMap<Uuid, usize>,
}

impl<T> InMemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record> InMemoryCollection<T> {
    /// Drops empty slots once they outnumber live records.
    fn compact(&mut self) {
        if self.slots.len() < 2 * self.index.len() + 16 {
            return;
        }

        self.slots.retain(Option::is_some);
        self.index = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.as_ref().map(|r| (r.id(), pos)))
            .collect();
    }
}

impl<T> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> for InMemoryCollection<T> {
    fn get(&self, id: Uuid) -> Option<&T> {
        let pos = *self.index.get(&id)?;
        self.slots.get(pos)?.as_ref()
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut T> {
        let pos = *self.index.get(&id)?;
        self.slots.get_mut(pos)?.as_mut()
    }

    fn put(&mut self, record: T) {
        let id = record.id();
        match self.index.get(&id) {
            Some(&pos) => self.slots[pos] = Some(record),
            None => {
                self.index.insert(id, self.slots.len());
                self.slots.push(Some(record));
            }
        }
    }

    fn delete(&mut self, id: Uuid) -> Option<T> {
        let pos = self.index.remove(&id)?;
        let removed = self.slots.get_mut(pos)?.take();
        self.compact();
        removed
    }

    fn scan(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.slots.iter().filter_map(Option::as_ref))
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}
