// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Periodic flush driver for a [`BatchingCollector`].
//!
//! The collector itself never schedules anything; this driver supplies the
//! archetypal external scheduler: a timer that flushes on a fixed interval
//! and leaves failed batches in place for the next tick.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::collector::BatchingCollector;
use crate::sink::LogSink;

/// Flushes a collector on a fixed interval until cancelled.
pub struct PeriodicFlusher<S> {
    collector: Arc<BatchingCollector<S>>,
    interval: Duration,
    cancel_token: CancellationToken,
}

impl<S: LogSink> PeriodicFlusher<S> {
    #[must_use]
    pub fn new(collector: Arc<BatchingCollector<S>>, interval: Duration) -> Self {
        Self {
            collector,
            interval,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Token that stops the driver. On cancellation `run` performs one
    /// final drain flush before returning.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Runs the flush loop. Spawn this on the runtime:
    ///
    /// ```rust,ignore
    /// let flusher = PeriodicFlusher::new(collector, Duration::from_secs(10));
    /// let cancel = flusher.cancel_token();
    /// tokio::spawn(flusher.run());
    /// ```
    ///
    /// A failed flush is logged and retried on the next tick; the collector
    /// keeps the batch, so nothing is lost between attempts.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        // interval() fires immediately; consume that tick so the first
        // flush happens one full interval after startup.
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.collector.flush().await {
                        error!("Failed to flush logs, will retry next interval: {e}");
                    }
                }
                () = self.cancel_token.cancelled() => {
                    debug!("Log flusher shutting down");
                    if let Err(e) = self.collector.flush().await {
                        error!("Failed to flush logs during shutdown: {e}");
                    }
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::entry::{LogEntry, LogEvent};
    use crate::error::SinkError;

    /// Sink sharing its delivered batches with the test body.
    #[derive(Default, Clone)]
    struct RecordingSink {
        batches: Arc<StdMutex<Vec<Vec<LogEntry>>>>,
    }

    #[async_trait]
    impl LogSink for RecordingSink {
        async fn flush_logs(&self, logs: Vec<LogEntry>) -> Result<(), SinkError> {
            self.batches.lock().unwrap().push(logs);
            Ok(())
        }
    }

    fn event(message: &str) -> LogEvent {
        LogEvent {
            message: message.to_string(),
            level: "INFO".to_string(),
            created: 1_700_000_000.0,
            logger_name: "test".to_string(),
            exception: None,
        }
    }

    #[tokio::test]
    async fn test_cancellation_drains_buffer() {
        let sink = RecordingSink::default();
        let batches = Arc::clone(&sink.batches);
        let collector = Arc::new(BatchingCollector::new(sink));
        collector.record(event("pending"));

        // A long interval: only the shutdown flush can drain the buffer.
        let flusher = PeriodicFlusher::new(Arc::clone(&collector), Duration::from_secs(3600));
        let cancel = flusher.cancel_token();
        let handle = tokio::spawn(flusher.run());

        cancel.cancel();
        handle.await.unwrap();

        assert!(collector.is_empty());
        assert_eq!(batches.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_interval_flush_delivers_entries() {
        let sink = RecordingSink::default();
        let batches = Arc::clone(&sink.batches);
        let collector = Arc::new(BatchingCollector::new(sink));
        collector.record(event("tick me out"));

        let flusher = PeriodicFlusher::new(Arc::clone(&collector), Duration::from_millis(10));
        let cancel = flusher.cancel_token();
        let handle = tokio::spawn(flusher.run());

        // Poll until the timer loop has flushed the entry.
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while !collector.is_empty() && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        cancel.cancel();
        handle.await.unwrap();

        assert!(collector.is_empty());
        assert!(!batches.lock().unwrap().is_empty());
    }
}
