//! Dashboard Todo List
//!
//! Ordered list persisted as a full JSON snapshot after every mutation.

use crate::error::AppResult;
use crate::models::TodoItem;
use crate::storage::{KeyValueStore, TODOS_KEY};

#[derive(Debug, Clone)]
pub struct TodoList<S: KeyValueStore> {
    store: S,
    items: Vec<TodoItem>,
}

impl<S: KeyValueStore> TodoList<S> {
    /// Load the saved snapshot; a corrupt one starts an empty list
    pub fn load(store: S) -> Self {
        let items = match store.get(TODOS_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("[TODO] Discarding unreadable snapshot: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        Self { store, items }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Append a trimmed entry. Blank text is ignored and returns `false`.
    pub fn add(&mut self, text: &str) -> AppResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        let mut next = self.items.clone();
        next.push(TodoItem {
            text: text.to_string(),
            completed: false,
        });
        self.commit(next)?;
        Ok(true)
    }

    /// Flip `completed` at `index`; out of range is a no-op
    pub fn toggle(&mut self, index: usize) -> AppResult<bool> {
        if index >= self.items.len() {
            return Ok(false);
        }
        let mut next = self.items.clone();
        next[index].completed = !next[index].completed;
        self.commit(next)?;
        Ok(true)
    }

    /// Remove the entry at `index`; out of range is a no-op
    pub fn remove(&mut self, index: usize) -> AppResult<bool> {
        if index >= self.items.len() {
            return Ok(false);
        }
        let mut next = self.items.clone();
        next.remove(index);
        self.commit(next)?;
        Ok(true)
    }

    /// Save `next`, then adopt it. A failed save leaves the list untouched.
    fn commit(&mut self, next: Vec<TodoItem>) -> AppResult<()> {
        let snapshot = serde_json::to_string(&next)?;
        self.store.set(TODOS_KEY, &snapshot)?;
        self.items = next;
        Ok(())
    }
}
