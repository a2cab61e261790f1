//! A value with an unconfirmed local edit on top of the last confirmed one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimistic<T> {
    confirmed: T,
    pending: Option<T>,
}

impl<T: Clone + PartialEq> Optimistic<T> {
    pub fn new(value: T) -> Self {
        Self {
            confirmed: value,
            pending: None,
        }
    }

    /// The value to display: the pending edit if any, else the confirmed value
    pub fn value(&self) -> &T {
        self.pending.as_ref().unwrap_or(&self.confirmed)
    }

    pub fn confirmed(&self) -> &T {
        &self.confirmed
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Show `value` ahead of confirmation. Refused while another edit is pending.
    pub fn begin(&mut self, value: T) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(value);
        true
    }

    /// The pending edit was accepted with the given authoritative value
    pub fn confirm(&mut self, value: T) {
        self.pending = None;
        self.confirmed = value;
    }

    /// The pending edit was rejected; fall back to the confirmed value
    pub fn rollback(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Replace the confirmed value from a fresh fetch, leaving any pending edit alone
    pub fn refresh(&mut self, value: T) {
        self.confirmed = value;
    }
}
