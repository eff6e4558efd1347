//! Background pacing for auto-advance after an answer.

use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use super::{PendingAdvance, QuizEngine, QuizError, QuizPhase};

/// Anything that owns a quiz and can take a deferred advance.
pub trait AdvanceTarget {
    fn advance_pending(&mut self, pending: PendingAdvance) -> Result<QuizPhase, QuizError>;
}

impl AdvanceTarget for QuizEngine {
    fn advance_pending(&mut self, pending: PendingAdvance) -> Result<QuizPhase, QuizError> {
        QuizEngine::advance_pending(self, pending)
    }
}

/// One-shot timer thread that hands a [`PendingAdvance`] back to its target
/// once the token's delay has elapsed.
///
/// Dropping the timer before it fires cancels it.
///
/// ```ignore
/// let quiz = Arc::new(Mutex::new(QuizEngine::embedded()?));
/// let outcome = quiz.lock().unwrap().submit_answer(1)?;
/// let timer = AdvanceTimer::spawn(quiz.clone(), outcome.pending);
/// // ... render the marked options ...
/// assert!(timer.join());
/// ```
pub struct AdvanceTimer {
    cancel_tx: Sender<()>,
    handle: Option<JoinHandle<bool>>,
}

impl AdvanceTimer {
    pub fn spawn<T>(target: Arc<Mutex<T>>, pending: PendingAdvance) -> Self
    where
        T: AdvanceTarget + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = channel();

        let handle = thread::spawn(move || {
            match cancel_rx.recv_timeout(pending.delay()) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return false,
            }

            let Ok(mut guard) = target.lock() else {
                tracing::warn!("quiz lock poisoned, dropping pending advance");
                return false;
            };
            guard.advance_pending(pending).is_ok()
        });

        AdvanceTimer {
            cancel_tx,
            handle: Some(handle),
        }
    }

    /// Stop the timer if it has not fired yet.
    pub fn cancel(mut self) -> bool {
        let _ = self.cancel_tx.send(());
        self.wait()
    }

    /// Wait for the timer. Returns true if the advance was applied.
    pub fn join(mut self) -> bool {
        self.wait()
    }

    fn wait(&mut self) -> bool {
        self.handle
            .take()
            .map(|handle| handle.join().unwrap_or(false))
            .unwrap_or(false)
    }
}
