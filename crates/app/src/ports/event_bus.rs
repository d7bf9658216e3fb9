//! Event bus port — publish/subscribe for scoreboard events.

use std::future::Future;

use scoreboard_domain::error::ScoreboardError;
use scoreboard_domain::event::ScoreboardEvent;

/// Publishes scoreboard events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(
        &self,
        event: ScoreboardEvent,
    ) -> impl Future<Output = Result<(), ScoreboardError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: ScoreboardEvent,
    ) -> impl Future<Output = Result<(), ScoreboardError>> + Send {
        (**self).publish(event)
    }
}
