//! FAQ accordion open/closed state

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccordionState {
    allow_multiple: bool,
    open: BTreeSet<usize>,
}

impl AccordionState {
    pub fn new(allow_multiple: bool) -> Self {
        Self {
            allow_multiple,
            open: BTreeSet::new(),
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Open or close one item. In single mode opening an item closes the rest.
    pub fn toggle(&mut self, index: usize) {
        if self.open.remove(&index) {
            return;
        }
        if !self.allow_multiple {
            self.open.clear();
        }
        self.open.insert(index);
    }

    pub fn close_all(&mut self) {
        self.open.clear();
    }

    pub fn open_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().copied()
    }
}
