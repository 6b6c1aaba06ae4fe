//! Debounced breach checks for a stream of password edits.
//!
//! Each input cancels the previous timer and bumps a generation counter. A
//! lookup that was already dispatched cannot be aborted, so its result is
//! tagged with the generation it was started for and dropped when a newer
//! input has arrived in the meantime. The check happens both before sending
//! and when receiving, so an outcome already queued for an older input is
//! never handed out.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio_util::sync::CancellationToken;

use super::{BreachStatus, RangeLookup, check_password, should_check};
use crate::config::Config;

/// Result of one debounced check, delivered on the monitor's channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachOutcome {
    pub generation: u64,
    pub status: BreachStatus,
}

/// What `on_input` did with an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    /// A check will run after the debounce interval unless superseded.
    Scheduled { generation: u64 },
    /// Too short to check. Any pending check was still cancelled.
    Skipped,
}

/// Receiving end of a [`BreachMonitor`]. Yields only outcomes for the most
/// recent input.
pub struct BreachOutcomes {
    rx: mpsc::Receiver<BreachOutcome>,
    generation: Arc<AtomicU64>,
}

impl BreachOutcomes {
    fn is_current(&self, outcome: &BreachOutcome) -> bool {
        outcome.generation == self.generation.load(Ordering::SeqCst)
    }

    /// Waits for the next current outcome. `None` once the monitor is
    /// dropped and every queued outcome has been drained.
    pub async fn recv(&mut self) -> Option<BreachOutcome> {
        while let Some(outcome) = self.rx.recv().await {
            if self.is_current(&outcome) {
                return Some(outcome);
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(generation = outcome.generation, "dropping queued stale breach result");
        }
        None
    }

    /// Non-blocking [`recv`](Self::recv).
    pub fn try_recv(&mut self) -> Result<BreachOutcome, TryRecvError> {
        loop {
            let outcome = self.rx.try_recv()?;
            if self.is_current(&outcome) {
                return Ok(outcome);
            }
        }
    }
}

pub struct BreachMonitor<L> {
    lookup: Arc<L>,
    debounce: Duration,
    min_len: usize,
    pending: Option<CancellationToken>,
    generation: Arc<AtomicU64>,
    tx: mpsc::Sender<BreachOutcome>,
}

impl<L: RangeLookup + 'static> BreachMonitor<L> {
    /// Creates a monitor and the receiving end of its outcome channel.
    pub fn new(lookup: L, config: &Config) -> (Self, BreachOutcomes) {
        let (tx, rx) = mpsc::channel(16);
        let generation = Arc::new(AtomicU64::new(0));
        let monitor = Self {
            lookup: Arc::new(lookup),
            debounce: config.debounce,
            min_len: config.min_breach_check_len,
            pending: None,
            generation: Arc::clone(&generation),
            tx,
        };
        (monitor, BreachOutcomes { rx, generation })
    }

    /// Generation of the most recent input.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Cancels the pending timer without scheduling a new check. Results of
    /// lookups already in flight are discarded.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Registers a new value of the password field.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_input(&mut self, password: &SecretString) -> InputDisposition {
        self.cancel();
        let generation = self.current_generation();

        if !should_check(password, self.min_len) {
            #[cfg(feature = "tracing")]
            tracing::debug!(generation, "breach check skipped for short input");
            return InputDisposition::Skipped;
        }

        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let lookup = Arc::clone(&self.lookup);
        let current = Arc::clone(&self.generation);
        let tx = self.tx.clone();
        let debounce = self.debounce;
        let password = SecretString::new(password.expose_secret().to_string().into());

        #[cfg(feature = "tracing")]
        tracing::debug!(generation, "breach check scheduled");

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(debounce) => {}
            }

            let status = BreachStatus::from(check_password(lookup.as_ref(), &password).await);

            if current.load(Ordering::SeqCst) != generation {
                #[cfg(feature = "tracing")]
                tracing::debug!(generation, "discarding stale breach result");
                return;
            }

            #[cfg(feature = "tracing")]
            {
                if status == BreachStatus::Unknown {
                    tracing::warn!(generation, "breach lookup failed, status unknown");
                }
            }

            if let Err(e) = tx.send(BreachOutcome { generation, status }).await {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send breach check result: {}", e);
                #[cfg(not(feature = "tracing"))]
                let _ = e;
            }
        });

        InputDisposition::Scheduled { generation }
    }
}

impl<L> Drop for BreachMonitor<L> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::BreachQueryResult;
    use crate::breach::testing::FakeCorpus;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn prefix_of(pwd: &str) -> String {
        crate::breach::digest_and_split(&secret(pwd)).prefix().to_string()
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_dispatches_one_lookup_for_last_value() {
        let corpus = FakeCorpus::default();
        corpus.insert("password", 7);
        let (mut monitor, mut rx) = BreachMonitor::new(corpus.clone(), &Config::default());

        for value in ["pass", "passw", "passwo", "passwor", "password"] {
            monitor.on_input(&secret(value));
            tokio::time::sleep(Duration::from_millis(200)).await;
        }

        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(outcome.status, BreachStatus::Known(BreachQueryResult::breached(7)));
        assert_eq!(outcome.generation, monitor.current_generation());
        assert_eq!(corpus.calls(), vec![prefix_of("password")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_dispatched_before_debounce_elapses() {
        let corpus = FakeCorpus::default();
        let (mut monitor, mut rx) = BreachMonitor::new(corpus.clone(), &Config::default());

        monitor.on_input(&secret("hunter22"));
        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(corpus.calls().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(outcome.status, BreachStatus::Known(BreachQueryResult::not_found()));
        assert_eq!(corpus.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_inputs_never_hit_the_corpus() {
        let corpus = FakeCorpus::default();
        let (mut monitor, mut rx) = BreachMonitor::new(corpus.clone(), &Config::default());

        assert_eq!(monitor.on_input(&secret("")), InputDisposition::Skipped);
        assert_eq!(monitor.on_input(&secret("abc")), InputDisposition::Skipped);
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(corpus.calls().is_empty());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_input_cancels_pending_check() {
        let corpus = FakeCorpus::default();
        let (mut monitor, mut rx) = BreachMonitor::new(corpus.clone(), &Config::default());

        monitor.on_input(&secret("longenough"));
        tokio::time::sleep(Duration::from_millis(500)).await;
        monitor.on_input(&secret("lo"));
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(corpus.calls().is_empty());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_in_flight_response_is_discarded() {
        let corpus = FakeCorpus::default();
        corpus.insert("slowpassword", 11);
        corpus.insert("fastpassword", 22);
        corpus.delay("slowpassword", Duration::from_secs(10));
        let (mut monitor, mut rx) = BreachMonitor::new(corpus.clone(), &Config::default());

        monitor.on_input(&secret("slowpassword"));
        // Past the debounce: the slow lookup is now in flight.
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(corpus.calls(), vec![prefix_of("slowpassword")]);

        let disposition = monitor.on_input(&secret("fastpassword"));
        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(
            InputDisposition::Scheduled { generation: outcome.generation },
            disposition
        );
        assert_eq!(outcome.status, BreachStatus::Known(BreachQueryResult::breached(22)));

        // Let the slow lookup finish; its answer must not surface.
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        assert_eq!(corpus.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_result_for_older_input_is_not_delivered() {
        let corpus = FakeCorpus::default();
        corpus.insert("firstpassword", 5);
        let (mut monitor, mut rx) = BreachMonitor::new(corpus.clone(), &Config::default());

        monitor.on_input(&secret("firstpassword"));
        // The first check completes and its outcome sits in the queue.
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(corpus.calls(), vec![prefix_of("firstpassword")]);

        let disposition = monitor.on_input(&secret("secondpassword"));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(
            InputDisposition::Scheduled { generation: outcome.generation },
            disposition
        );
        assert_eq!(outcome.generation, monitor.current_generation());
        assert_eq!(outcome.status, BreachStatus::Known(BreachQueryResult::not_found()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_receiver_is_tolerated() {
        let corpus = FakeCorpus::default();
        let (mut monitor, rx) = BreachMonitor::new(corpus.clone(), &Config::default());
        drop(rx);

        let first = monitor.on_input(&secret("password"));
        tokio::time::sleep(Duration::from_secs(2)).await;
        let second = monitor.on_input(&secret("password2"));
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(first, InputDisposition::Scheduled { generation: 1 });
        assert_eq!(second, InputDisposition::Scheduled { generation: 2 });
        assert_eq!(corpus.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_lookup_reports_unknown() {
        let (mut monitor, mut rx) = BreachMonitor::new(FakeCorpus::failing(500), &Config::default());

        monitor.on_input(&secret("password"));
        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(outcome.status, BreachStatus::Unknown);
    }
}
