//! Request tokens for discarding stale responses.
//!
//! Each component that issues a kind of request owns one `RequestSequence`.
//! Only the most recently issued token is accepted back; anything older is
//! dropped when it completes.

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    issued: u64,
    live: Option<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding every earlier one
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        self.live = Some(self.issued);
        RequestToken(self.issued)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.live == Some(token.0)
    }

    /// Accept a completed response. Returns false (and changes nothing) for stale tokens.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.live = None;
            true
        } else {
            false
        }
    }

    /// Forget the outstanding request so its response is discarded
    pub fn invalidate(&mut self) {
        self.live = None;
    }

    /// Whether the latest request is still awaiting its response
    pub fn in_flight(&self) -> bool {
        self.live.is_some()
    }
}
