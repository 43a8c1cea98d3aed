use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};
use crate::session::StorefrontEvent;

/// Timing of the staged timeline reveal.
///
/// Stage `n` of the sequence is revealed at `initial_delay + (n + 1) * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSchedule {
    pub initial_delay: Duration,
    pub step: Duration,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            step: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Completed { revealed: usize },
    Cancelled { revealed: usize },
    /// The event receiver went away mid-reveal.
    Closed { revealed: usize },
}

/// Runs at most one reveal at a time. Starting a new reveal cancels the one in
/// flight, so timelines never overlap.
pub struct RevealAnimator {
    schedule: RevealSchedule,
    current: Option<(CancellationToken, JoinHandle<RevealOutcome>)>,
}

impl RevealAnimator {
    pub fn new(schedule: RevealSchedule) -> Self {
        Self { schedule, current: None }
    }

    pub fn start(&mut self, sequence: Vec<usize>, events: mpsc::Sender<StorefrontEvent>) {
        self.cancel();
        let token = CancellationToken::new();
        let handle = tokio::spawn(run_reveal(sequence, self.schedule, token.clone(), events));
        self.current = Some((token, handle));
    }

    /// Cancels the reveal in flight. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some((token, handle)) => {
                token.cancel();
                !handle.is_finished()
            }
            None => false,
        }
    }

    /// Waits for the current reveal to end.
    pub async fn finish(&mut self) -> Option<RevealOutcome> {
        let (_, handle) = self.current.take()?;
        handle.await.ok()
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        if let Some((token, _)) = self.current.take() {
            token.cancel();
        }
    }
}

async fn pause(delay: Duration, token: &CancellationToken) -> bool {
    tokio::select! {
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}

#[instrument(name = "stage_reveal", skip(schedule, token, events), fields(stages = sequence.len()))]
async fn run_reveal(
    sequence: Vec<usize>,
    schedule: RevealSchedule,
    token: CancellationToken,
    events: mpsc::Sender<StorefrontEvent>,
) -> RevealOutcome {
    if !pause(schedule.initial_delay, &token).await {
        return RevealOutcome::Cancelled { revealed: 0 };
    }
    let mut revealed = 0;
    for stage in sequence {
        if !pause(schedule.step, &token).await {
            debug!(revealed, "Reveal cancelled");
            return RevealOutcome::Cancelled { revealed };
        }
        // a full channel must not outlive cancellation
        tokio::select! {
            _ = token.cancelled() => {
                debug!(revealed, "Reveal cancelled while delivering");
                return RevealOutcome::Cancelled { revealed };
            }
            sent = events.send(StorefrontEvent::StageRevealed(stage)) => {
                if sent.is_err() {
                    return RevealOutcome::Closed { revealed };
                }
            }
        }
        revealed += 1;
    }
    debug!(revealed, "Reveal complete");
    RevealOutcome::Completed { revealed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn schedule() -> RevealSchedule {
        RevealSchedule::default()
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveals_each_stage_after_the_step_delay() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut animator = RevealAnimator::new(schedule());
        let started = Instant::now();
        animator.start(vec![0, 1, 2], tx);

        let mut seen = Vec::new();
        let mut times = Vec::new();
        for _ in 0..3 {
            match rx.recv().await {
                Some(StorefrontEvent::StageRevealed(stage)) => {
                    seen.push(stage);
                    times.push(started.elapsed());
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(times[0], Duration::from_millis(800));
        assert_eq!(times[2], Duration::from_millis(1400));
        assert_eq!(animator.finish().await, Some(RevealOutcome::Completed { revealed: 3 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous_reveal() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut animator = RevealAnimator::new(schedule());
        animator.start(vec![0, 1, 2, 3, 4], tx.clone());
        tokio::time::sleep(Duration::from_millis(850)).await;

        // first reveal produced stage 0 only
        animator.start(vec![0, 1], tx);
        let mut seen = Vec::new();
        while let Some(StorefrontEvent::StageRevealed(stage)) = rx.recv().await {
            seen.push(stage);
            if seen.len() == 3 {
                break;
            }
        }
        assert_eq!(seen, vec![0, 0, 1]);
        assert_eq!(animator.finish().await, Some(RevealOutcome::Completed { revealed: 2 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_first_stage() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut animator = RevealAnimator::new(schedule());
        animator.start(vec![0, 1], tx);
        assert!(animator.cancel());
        assert!(!animator.cancel());
        assert_eq!(animator.finish().await, None);
        // sender dropped with the cancelled task
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_while_channel_full_drops_stale_stage() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut animator = RevealAnimator::new(schedule());
        animator.start(vec![0, 1, 2, 3, 4], tx.clone());
        // stage 0 fills the channel, stage 1 is stuck waiting for room
        tokio::time::sleep(Duration::from_millis(1200)).await;

        animator.start(vec![0], tx);
        let mut seen = Vec::new();
        for _ in 0..2 {
            match rx.recv().await {
                Some(StorefrontEvent::StageRevealed(stage)) => seen.push(stage),
                other => panic!("unexpected event: {:?}", other),
            }
        }
        assert_eq!(seen, vec![0, 0]);
        assert_eq!(animator.finish().await, Some(RevealOutcome::Completed { revealed: 1 }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_receiver_stops_reveal() {
        let (tx, rx) = mpsc::channel(16);
        drop(rx);
        let mut animator = RevealAnimator::new(schedule());
        animator.start(vec![0, 1, 2], tx);
        assert_eq!(animator.finish().await, Some(RevealOutcome::Closed { revealed: 0 }));
    }
}
