// SPDX-License-Identifier: MPL-2.0
//! Selected-tab state machine.

/// Outcome of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The requested tab was already selected.
    Unchanged,
    /// The requested index does not name a tab.
    Rejected { index: usize },
    /// The selection moved.
    Changed { from: usize, to: usize },
}

/// Index of the selected tab, always in `0..count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    count: usize,
}

impl Selection {
    /// Returns `None` when `index` is not a valid tab.
    #[must_use]
    pub fn new(index: usize, count: usize) -> Option<Self> {
        (index < count).then_some(Self { index, count })
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_selected(self, index: usize) -> bool {
        self.index == index
    }

    /// Moves the selection to `target` and reports what happened.
    pub fn select(&mut self, target: usize) -> Transition {
        if target >= self.count {
            return Transition::Rejected { index: target };
        }
        if target == self.index {
            return Transition::Unchanged;
        }

        let from = self.index;
        self.index = target;
        Transition::Changed { from, to: target }
    }
}
