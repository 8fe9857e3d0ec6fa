//! Connection id generation.

use slchat_proto::UserId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out connection ids to the transport.
///
/// Ids are strictly increasing, so an id is never handed out twice while the
/// process runs. The core itself only requires that an id is not reused
/// while it is still registered.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Create a generator whose first id is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next id.
    pub fn next(&self) -> UserId {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let generator = IdGenerator::new();
        assert_eq!(generator.next(), 0);
        assert_eq!(generator.next(), 1);
        assert_eq!(generator.next(), 2);
    }
}
