// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

/// Shared, coalescing "needs repaint" flag.
///
/// Clones share one flag. Any number of [`RepaintSignal::request`] calls
/// between two [`RepaintSignal::take`] calls collapse into a single pending
/// repaint.
#[derive(Clone, Debug, Default)]
pub struct RepaintSignal {
    pending: Rc<Cell<bool>>,
}

impl RepaintSignal {
    /// Creates a new signal with no pending repaint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a repaint as pending.
    pub fn request(&self) {
        self.pending.set(true);
    }

    /// Returns `true` if a repaint is pending, without clearing it.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Returns whether a repaint was pending and clears the flag.
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }

    /// Returns `true` if both handles share the same flag.
    #[must_use]
    pub fn same_signal(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pending, &other.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::RepaintSignal;

    #[test]
    fn requests_coalesce_until_taken() {
        let signal = RepaintSignal::new();
        let other = signal.clone();
        assert!(signal.same_signal(&other));

        other.request();
        other.request();
        signal.request();
        assert!(signal.is_pending());
        assert!(signal.take());
        assert!(!signal.take());
        assert!(!other.is_pending());
    }
}
