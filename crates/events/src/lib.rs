//! Subscription plumbing for the wardlight service layer.
//!
//! - [`SubscriberSet`] — bounded fan-out registry delivering updates to
//!   per-subscriber queues in registration order.
//! - [`RosterUpdate`] / [`AlertUpdate`] — the typed payloads the simulator
//!   publishes each tick.

pub mod feed;
pub mod update;

pub use feed::{FeedError, SubscriberSet, SubscriptionId};
pub use update::{AlertUpdate, RosterUpdate};
