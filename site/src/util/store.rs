//! Whole-value state cells used by controllers.
//!
//! DESIGN
//! ======
//! Controllers never mutate state field-by-field from async continuations;
//! they compute the next value and replace it in one write. A reader can
//! therefore never observe a half-applied transition. Pages back the cell
//! with an `RwSignal`; native tests back it with `Arc<Mutex<_>>`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

/// A replaceable state cell.
pub trait StateStore<T>: Clone + 'static {
    /// Current value without subscribing to changes.
    fn snapshot(&self) -> T;

    /// Replace the whole value.
    fn replace(&self, value: T);

    /// Read-modify-write helper built on `snapshot` + `replace`.
    fn modify(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.snapshot();
        f(&mut value);
        self.replace(value);
    }
}

impl<T> StateStore<T> for RwSignal<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn snapshot(&self) -> T {
        self.try_get_untracked().unwrap_or_default()
    }

    fn replace(&self, value: T) {
        // A disposed signal hands the value back; the view is gone so it is dropped.
        drop(self.try_set(value));
    }
}

impl<T> StateStore<T> for Arc<Mutex<T>>
where
    T: Clone + 'static,
{
    fn snapshot(&self) -> T {
        self.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn replace(&self, value: T) {
        *self.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }
}
