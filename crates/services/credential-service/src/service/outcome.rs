//! Completion channel for password-change outcomes.

use common::AppResult;
use tokio::sync::oneshot;

/// Outcome of a password-change request.
///
/// Success carries no payload; failure carries the cause, which for
/// delegated requests is the store's own error passed through unchanged.
pub type ChangeOutcome = AppResult<()>;

/// Caller-supplied completion channel receiving exactly one outcome.
///
/// Delivery consumes the sink, so double-delivery is unrepresentable; the
/// handler contract guarantees the outcome is produced.
#[derive(Debug)]
pub struct OutcomeSink {
    tx: oneshot::Sender<ChangeOutcome>,
}

impl OutcomeSink {
    /// Create a sink together with the receiver the dispatcher awaits.
    pub fn channel() -> (Self, oneshot::Receiver<ChangeOutcome>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Deliver the single outcome for this request.
    ///
    /// A dispatcher that dropped its receiver no longer observes outcomes;
    /// delivery is not an error in that case.
    pub fn deliver(self, outcome: ChangeOutcome) {
        let _ = self.tx.send(outcome);
    }
}
