//! Paid-transition event broadcasting.
//!
//! The dashboard's revenue figures need to refresh whenever a vendor payment
//! actually becomes paid. Rather than polling, interested views subscribe to
//! a generation counter that bumps on every genuine transition into Paid.
//! A watch channel coalesces bursts: a subscriber that wakes up late sees one
//! changed value, refreshes once, and is current.

use tokio::sync::watch;

/// Broadcast source for paid-transition notifications. Cheap to share via
/// `Arc`; every subscriber gets its own receiver.
#[derive(Debug)]
pub struct PaymentEvents {
    sender: watch::Sender<u64>,
}

impl Default for PaymentEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentEvents {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { sender }
    }

    /// Bumps the generation counter. Called exactly once per genuine
    /// non-Paid to Paid transition; callers decide whether a save qualifies.
    pub fn notify_paid(&self) {
        self.sender.send_modify(|generation| *generation += 1);
    }

    /// The current generation. Mostly useful for polling clients that diff
    /// against a value they saw earlier.
    #[must_use]
    pub fn generation(&self) -> u64 {
        *self.sender.borrow()
    }

    /// Subscribes to future notifications. The receiver starts out having
    /// already seen the current generation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.sender.subscribe()
    }
}
