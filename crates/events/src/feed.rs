//! Bounded fan-out subscriber registry.
//!
//! [`SubscriberSet`] replaces ad-hoc callback lists with an explicit
//! observer abstraction: subscribers get their own unbounded queue, the
//! publisher enqueues synchronously in registration order, and slow or
//! dropped subscribers never block a publish.
//!
//! Re-entrancy: subscribing or unsubscribing concurrently with a publish
//! is safe. The publisher snapshots the registry before delivering
//! (copy-then-iterate), so a subscriber registered while a publish is in
//! flight does not receive that in-flight update, and removal is never
//! performed mid-walk.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tokio::sync::mpsc;

/// Maximum subscribers per feed unless overridden via
/// [`SubscriberSet::with_limit`].
pub const DEFAULT_MAX_SUBSCRIBERS: usize = 64;

/// Handle identifying one subscription; ids are monotonically increasing
/// and never reused, so iteration order is registration order.
pub type SubscriptionId = u64;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Subscriber limit reached ({max})")]
    AtCapacity { max: usize },
}

/// Fan-out registry delivering cloned updates to every live subscriber.
pub struct SubscriberSet<T> {
    subscribers: RwLock<BTreeMap<SubscriptionId, mpsc::UnboundedSender<T>>>,
    next_id: AtomicU64,
    max_subscribers: usize,
}

impl<T: Clone> SubscriberSet<T> {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_SUBSCRIBERS)
    }

    /// Create a registry with a specific subscriber limit.
    pub fn with_limit(max_subscribers: usize) -> Self {
        Self {
            subscribers: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            max_subscribers,
        }
    }

    /// Register a new subscriber.
    ///
    /// Returns the subscription id (for [`unsubscribe`](Self::unsubscribe))
    /// and the receiver half of the subscriber's queue.
    pub fn subscribe(&self) -> Result<(SubscriptionId, mpsc::UnboundedReceiver<T>), FeedError> {
        let mut subscribers = self.subscribers.write().expect("subscriber lock poisoned");

        if subscribers.len() >= self.max_subscribers {
            return Err(FeedError::AtCapacity {
                max: self.max_subscribers,
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        subscribers.insert(id, tx);
        Ok((id, rx))
    }

    /// Remove a subscription. Returns `false` for unknown ids.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers
            .write()
            .expect("subscriber lock poisoned")
            .remove(&id)
            .is_some()
    }

    /// Deliver an update to every live subscriber in registration order.
    ///
    /// Returns the number of subscribers the update was enqueued to.
    /// Subscribers whose receiver has been dropped are pruned after the
    /// delivery pass.
    pub fn publish(&self, update: T) -> usize {
        // Snapshot under the read lock, deliver outside it.
        let snapshot: Vec<(SubscriptionId, mpsc::UnboundedSender<T>)> = self
            .subscribers
            .read()
            .expect("subscriber lock poisoned")
            .iter()
            .map(|(id, tx)| (*id, tx.clone()))
            .collect();

        let mut delivered = 0;
        let mut dead = Vec::new();

        for (id, tx) in &snapshot {
            if tx.send(update.clone()).is_ok() {
                delivered += 1;
            } else {
                dead.push(*id);
            }
        }

        if !dead.is_empty() {
            let mut subscribers = self.subscribers.write().expect("subscriber lock poisoned");
            for id in &dead {
                subscribers.remove(id);
            }
            tracing::debug!(count = dead.len(), "Pruned dead subscribers");
        }

        delivered
    }

    /// Current number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .expect("subscriber lock poisoned")
            .len()
    }
}

impl<T: Clone> Default for SubscriberSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_updates() {
        let feed = SubscriberSet::new();
        let (_id, mut rx) = feed.subscribe().expect("under limit");

        let delivered = feed.publish("hello".to_string());
        assert_eq!(delivered, 1);
        assert_eq!(rx.recv().await.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn every_subscriber_gets_its_own_copy() {
        let feed = SubscriberSet::new();
        let (_a, mut rx_a) = feed.subscribe().expect("under limit");
        let (_b, mut rx_b) = feed.subscribe().expect("under limit");

        assert_eq!(feed.publish(7u32), 2);
        assert_eq!(rx_a.recv().await, Some(7));
        assert_eq!(rx_b.recv().await, Some(7));
    }

    #[test]
    fn delivery_follows_registration_order() {
        let feed: SubscriberSet<u32> = SubscriberSet::new();
        let (first, _rx_a) = feed.subscribe().expect("under limit");
        let (second, _rx_b) = feed.subscribe().expect("under limit");
        let (third, _rx_c) = feed.subscribe().expect("under limit");

        // Ids are monotonic, and the registry iterates them in ascending
        // order, so registration order is delivery order.
        assert!(first < second && second < third);
    }

    #[test]
    fn unsubscribe_returns_false_for_unknown_id() {
        let feed: SubscriberSet<u32> = SubscriberSet::new();
        let (id, _rx) = feed.subscribe().expect("under limit");

        assert!(feed.unsubscribe(id));
        assert!(!feed.unsubscribe(id));
        assert!(!feed.unsubscribe(9999));
    }

    #[test]
    fn unsubscribed_subscriber_receives_nothing() {
        let feed = SubscriberSet::new();
        let (id, mut rx) = feed.subscribe().expect("under limit");

        feed.unsubscribe(id);
        assert_eq!(feed.publish(1u32), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn capacity_bound_is_enforced() {
        let feed: SubscriberSet<u32> = SubscriberSet::with_limit(2);
        let (first, _rx_a) = feed.subscribe().expect("under limit");
        let (_second, _rx_b) = feed.subscribe().expect("under limit");

        assert_matches!(feed.subscribe(), Err(FeedError::AtCapacity { max: 2 }));

        // Freeing a slot makes room again.
        assert!(feed.unsubscribe(first));
        assert!(feed.subscribe().is_ok());
    }

    #[test]
    fn dropped_receivers_are_pruned_on_publish() {
        let feed = SubscriberSet::new();
        let (_live, _rx_live) = feed.subscribe().expect("under limit");
        let (_dead, rx_dead) = feed.subscribe().expect("under limit");
        drop(rx_dead);

        assert_eq!(feed.publish(1u32), 1);
        assert_eq!(feed.subscriber_count(), 1);
    }

    #[test]
    fn publish_with_no_subscribers_is_a_no_op() {
        let feed: SubscriberSet<u32> = SubscriberSet::new();
        assert_eq!(feed.publish(42), 0);
    }
}
