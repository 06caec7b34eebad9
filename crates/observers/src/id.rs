use std::fmt;

/// Identifies one observer among those drawn from the same [`IdSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u32);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out monotonically increasing observer ids.
///
/// The source is an explicit value the caller owns and threads through
/// each subscription, rather than a process-wide counter, so id
/// assignment stays deterministic and test-local. Ids start at 1.
#[derive(Debug, Default)]
pub struct IdSource {
    next: u32,
}

impl IdSource {
    /// Creates a source whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> ObserverId {
        self.next += 1;
        ObserverId(self.next)
    }
}
