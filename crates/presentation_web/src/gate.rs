//! Busy flag guarding the browser refresh interval
//!
//! The page timer fires on a fixed period regardless of how long a cycle
//! takes. A tick that finds the gate closed is dropped.

use std::{cell::Cell, rc::Rc};

/// Shared busy flag for one recurring job
#[derive(Debug, Clone, Default)]
pub struct CycleGate {
    busy: Rc<Cell<bool>>,
}

impl CycleGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the gate unless a cycle is running
    ///
    /// The gate reopens when the returned guard is dropped.
    #[must_use]
    pub fn try_enter(&self) -> Option<CycleGuard> {
        if self.busy.replace(true) {
            return None;
        }
        Some(CycleGuard {
            busy: Rc::clone(&self.busy),
        })
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Marks a running cycle
#[derive(Debug)]
pub struct CycleGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
