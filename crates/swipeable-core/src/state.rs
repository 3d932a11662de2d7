//! Observable state cells with a single writer.
//!
//! A [`MutableState`] is the only handle able to change its value and is not
//! `Clone`. Any number of read-only [`State`] handles can be taken from it.
//! Readers poll once per frame and compare [`State::version`] to skip values
//! that have not changed.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::runtime::RuntimeHandle;

struct StateCell<T> {
    value: RefCell<T>,
    version: Cell<u64>,
}

pub struct MutableState<T> {
    cell: Rc<StateCell<T>>,
    runtime: Option<RuntimeHandle>,
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(StateCell {
                value: RefCell::new(value),
                version: Cell::new(0),
            }),
            runtime: None,
        }
    }

    /// Creates a cell that requests a frame from `runtime` on every write.
    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        let mut state = Self::new(value);
        state.runtime = Some(runtime);
        state
    }

    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.value.borrow())
    }

    pub fn set_value(&mut self, value: T) {
        *self.cell.value.borrow_mut() = value;
        self.bump();
    }

    pub fn version(&self) -> u64 {
        self.cell.version.get()
    }

    /// Returns a read-only handle observing this cell.
    pub fn as_state(&self) -> State<T> {
        State {
            cell: Rc::clone(&self.cell),
        }
    }

    fn bump(&self) {
        self.cell.version.set(self.cell.version.get().wrapping_add(1));
        if let Some(runtime) = &self.runtime {
            runtime.schedule();
        }
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    cell: Rc<StateCell<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.value.borrow())
    }

    /// Monotonic write counter; changes whenever the writer stores a value.
    pub fn version(&self) -> u64 {
        self.cell.version.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.cell.value.borrow())
            .field("version", &self.cell.version.get())
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &*self.cell.value.borrow())
            .field("version", &self.cell.version.get())
            .finish()
    }
}
