//! Refresh signal shared by the list and stats panes.
//!
//! The counter only ever grows. Observers remember the last value they acted
//! on and refetch whenever it differs; the number itself carries no meaning.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshCounter(u64);

impl RefreshCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RefreshWatcher {
    seen: u64,
}

impl RefreshWatcher {
    /// Start watching from the counter's current value
    pub fn new(counter: &RefreshCounter) -> Self {
        Self {
            seen: counter.value(),
        }
    }

    /// True once per change of the counter
    pub fn observe(&mut self, counter: &RefreshCounter) -> bool {
        if counter.value() == self.seen {
            return false;
        }
        self.seen = counter.value();
        true
    }
}
