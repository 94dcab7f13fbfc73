//! State Cells
//!
//! Where view state lives while async operations run against it.
//! Leptos views hand in reactive stores/signals, tests hand in `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

/// Shared, mutable state an async operation can come back to.
///
/// Both methods return `None` once the state is gone (its view unmounted);
/// late completions are then dropped.
pub trait StateCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

/// Result of a one-shot load shown by a view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Remote<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for Store<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
