use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Events delivered to the quiz driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    TransitionElapsed,
}

/// Delay between answering a question and moving on
///
/// At most one transition is pending at a time: scheduling a new one aborts
/// the previous task, and dropping the timer aborts whatever is left.
#[derive(Debug)]
pub struct TransitionTimer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl TransitionTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Send [`QuizEvent::TransitionElapsed`] on `events` after the delay,
    /// replacing any transition still pending
    pub fn schedule(&mut self, events: mpsc::Sender<QuizEvent>) {
        if self.cancel() {
            tracing::debug!("Replaced pending transition");
        }

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(QuizEvent::TransitionElapsed).await.is_err() {
                tracing::trace!("Quiz driver gone before transition elapsed");
            }
        }));
    }

    /// Abort the pending transition. Returns whether one was still running.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TransitionTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = TransitionTimer::new(Duration::from_millis(500));

        timer.schedule(tx);
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(QuizEvent::TransitionElapsed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = TransitionTimer::new(Duration::from_millis(500));

        timer.schedule(tx.clone());
        tokio::time::sleep(Duration::from_millis(300)).await;
        timer.schedule(tx);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(rx.recv().await, Some(QuizEvent::TransitionElapsed));
        // Only the replacement fired; every sender is gone once it finished
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = TransitionTimer::new(Duration::from_millis(500));

        timer.schedule(tx.clone());
        assert!(timer.is_pending());
        assert!(timer.cancel());
        assert!(!timer.is_pending());

        timer.schedule(tx);
        drop(timer);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(rx.recv().await, None);
    }
}
