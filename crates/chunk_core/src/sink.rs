//! Outbound seams of the controller: the state store and the analysis queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::protocol::{AnalysisCommand, StateUpdate};

use crate::error::DispatchError;

pub trait StateSink {
    fn apply(&self, update: StateUpdate) -> Result<(), DispatchError>;
}

/// Fire-and-forget intake for analysis requests. Retry, debouncing and
/// cancellation belong to whoever drains it.
pub trait AnalysisSink {
    fn enqueue(&self, cmd: AnalysisCommand) -> Result<(), DispatchError>;
}

impl<S: StateSink + ?Sized> StateSink for &S {
    fn apply(&self, update: StateUpdate) -> Result<(), DispatchError> {
        (**self).apply(update)
    }
}

impl<A: AnalysisSink + ?Sized> AnalysisSink for &A {
    fn enqueue(&self, cmd: AnalysisCommand) -> Result<(), DispatchError> {
        (**self).enqueue(cmd)
    }
}

impl StateSink for Sender<StateUpdate> {
    fn apply(&self, update: StateUpdate) -> Result<(), DispatchError> {
        let update_name = update.name();
        match self.try_send(update) {
            Ok(()) => {
                tracing::debug!(update = update_name, "queued state update");
                Ok(())
            }
            Err(err) => Err(map_send_error(err, "state")),
        }
    }
}

impl AnalysisSink for Sender<AnalysisCommand> {
    fn enqueue(&self, cmd: AnalysisCommand) -> Result<(), DispatchError> {
        let kind = cmd.kind;
        match self.try_send(cmd) {
            Ok(()) => {
                tracing::debug!(command = ?kind, "queued analysis command");
                Ok(())
            }
            Err(err) => Err(map_send_error(err, "analysis")),
        }
    }
}

fn map_send_error<T>(err: TrySendError<T>, target: &'static str) -> DispatchError {
    match err {
        TrySendError::Full(_) => DispatchError::QueueFull { target },
        TrySendError::Disconnected(_) => DispatchError::Disconnected { target },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn full_queue_is_reported() {
        let (tx, _rx) = bounded::<StateUpdate>(1);
        tx.apply(StateUpdate::RhsOutdated).expect("first fits");
        let err = tx.apply(StateUpdate::RhsOutdated).expect_err("second overflows");
        assert_eq!(err, DispatchError::QueueFull { target: "state" });
    }

    #[test]
    fn dropped_receiver_is_reported() {
        let (tx, rx) = bounded::<AnalysisCommand>(1);
        drop(rx);
        let err = tx
            .enqueue(AnalysisCommand {
                kind: shared::protocol::AnalysisKind::Lint,
                program: String::new(),
                segments: Vec::new(),
            })
            .expect_err("no receiver");
        assert_eq!(err, DispatchError::Disconnected { target: "analysis" });
    }
}
