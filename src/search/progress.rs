//! Last-write-wins status text shared between a search and its observers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloning shares the slot; a poisoned lock is recovered, not propagated.
#[derive(Debug, Clone, Default)]
pub struct ProgressString {
    inner: Arc<Mutex<String>>,
}

impl ProgressString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, text: impl Into<String>) {
        *self.lock() = text.into();
    }

    pub fn read(&self) -> String {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
