use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use super::StubError;

/// Tracks the single outstanding request of a stub.
#[derive(Debug, Default)]
pub struct PendingSlot {
    current: Mutex<Option<CancellationToken>>,
}

/// Held for the lifetime of a request; frees the slot when dropped.
pub(crate) struct PendingTicket<'a> {
    slot: &'a PendingSlot,
    token: CancellationToken,
}

impl PendingSlot {
    fn lock(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn begin(&self, name: &'static str) -> Result<PendingTicket<'_>, StubError> {
        let mut current = self.lock();
        if current.is_some() {
            return Err(StubError::AlreadyPending(name));
        }
        let token = CancellationToken::new();
        *current = Some(token.clone());
        Ok(PendingTicket { slot: self, token })
    }

    pub fn cancel(&self) -> bool {
        match self.lock().as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock().is_some()
    }
}

impl PendingTicket<'_> {
    /// Sleeps for `delay` unless the request is cancelled first.
    pub(crate) async fn simulate_latency(&self, delay: Duration, name: &'static str) -> Result<(), StubError> {
        tokio::select! {
            _ = self.token.cancelled() => Err(StubError::Cancelled(name)),
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

impl Drop for PendingTicket<'_> {
    fn drop(&mut self) {
        *self.slot.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_ticket_is_refused_until_first_drops() {
        let slot = PendingSlot::default();
        let ticket = slot.begin("voice").unwrap();
        assert!(slot.is_pending());
        assert_eq!(slot.begin("voice").err(), Some(StubError::AlreadyPending("voice")));
        drop(ticket);
        assert!(!slot.is_pending());
        assert!(slot.begin("voice").is_ok());
    }

    #[test]
    fn test_cancel_without_request() {
        let slot = PendingSlot::default();
        assert!(!slot.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts_latency() {
        let slot = PendingSlot::default();
        let ticket = slot.begin("image").unwrap();
        assert!(slot.cancel());
        let result = ticket.simulate_latency(Duration::from_secs(3), "image").await;
        assert_eq!(result, Err(StubError::Cancelled("image")));
    }
}
