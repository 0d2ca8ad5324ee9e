// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Capacity-bounded accumulation of log entries with explicit flush.
//!
//! The collector owns an ordered buffer of converted entries behind a single
//! mutex. `record()` appends and truncates in one critical section; `flush()`
//! snapshots the buffered prefix, releases the lock for the sink call, and
//! removes exactly that prefix once the sink confirms delivery. Entries
//! recorded while a flush is in flight are never part of that flush's batch
//! and never removed by it.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::constants::DEFAULT_CAPACITY;
use crate::entry::{format_entry, LogEntry, LogEvent};
use crate::error::SinkError;
use crate::sink::LogSink;

type TruncationCallback = Box<dyn Fn(usize) + Send + Sync>;

/// Accumulates log events in a bounded buffer and flushes them on demand.
///
/// Designed for one producer calling [`record`](Self::record) concurrently
/// with one consumer calling [`flush`](Self::flush); both operations guard
/// the buffer with the same lock. Two flushes racing each other are not
/// coordinated — serialize them externally if that can occur.
pub struct BatchingCollector<S> {
    /// Buffered entries, oldest first.
    buffer: Mutex<VecDeque<LogEntry>>,
    /// Fixed upper bound on the buffer length, enforced on every record.
    capacity: usize,
    sink: S,
    /// Invoked once per overflowing record call, before entries are dropped.
    on_truncated: Option<TruncationCallback>,
}

impl<S: LogSink> BatchingCollector<S> {
    /// Collector with the default capacity of
    /// [`DEFAULT_CAPACITY`](crate::constants::DEFAULT_CAPACITY) entries.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_capacity(sink, DEFAULT_CAPACITY)
    }

    /// Collector bounded at `capacity` entries.
    #[must_use]
    pub fn with_capacity(sink: S, capacity: usize) -> Self {
        Self {
            buffer: Mutex::new(VecDeque::new()),
            capacity,
            sink,
            on_truncated: None,
        }
    }

    /// Installs a truncation callback.
    ///
    /// Fired once per `record()` call that pushes the buffer past capacity,
    /// before the surplus entries are dropped, with the number of entries
    /// about to be dropped. Runs with the buffer lock held, so it must not
    /// call back into the collector.
    #[must_use]
    pub fn on_truncated(mut self, callback: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_truncated = Some(Box::new(callback));
        self
    }

    /// Converts `event` into an entry and appends it to the buffer.
    ///
    /// If the append pushes the buffer past capacity, the oldest surplus
    /// entries are dropped in the same critical section, leaving exactly
    /// `capacity` entries with the newest preserved.
    pub fn record(&self, event: LogEvent) {
        let entry = format_entry(&event);
        let mut buffer = self.lock_buffer();
        buffer.push_back(entry);
        let len = buffer.len();
        if len > self.capacity {
            let surplus = len - self.capacity;
            if let Some(callback) = &self.on_truncated {
                callback(surplus);
            }
            warn!(
                "Log buffer over capacity ({}), dropping {} oldest entries",
                self.capacity, surplus
            );
            buffer.drain(..surplus);
        }
    }

    /// Delivers the currently buffered entries to the sink.
    ///
    /// Snapshots the buffer length, hands that prefix to the sink, and only
    /// after the sink returns success removes the prefix — by position, so
    /// entries appended while the sink call was in flight survive. On sink
    /// failure the buffer is left untouched and the error is propagated;
    /// calling `flush()` again retries the same entries.
    ///
    /// An empty buffer is a no-op: the sink is not invoked.
    pub async fn flush(&self) -> Result<(), SinkError> {
        // Snapshot under the lock; more entries may arrive while the sink
        // call runs.
        let batch: Vec<LogEntry> = {
            let buffer = self.lock_buffer();
            buffer.iter().cloned().collect()
        };
        if batch.is_empty() {
            return Ok(());
        }
        let snapshot_len = batch.len();
        debug!("Flushing {} log entries", snapshot_len);
        self.sink.flush_logs(batch).await?;
        let mut buffer = self.lock_buffer();
        // record() may have truncated part of the snapshot away while the
        // sink call ran.
        let removable = snapshot_len.min(buffer.len());
        buffer.drain(..removable);
        debug!("Flushed {} log entries", snapshot_len);
        Ok(())
    }

    /// Number of entries currently buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_buffer().len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_buffer().is_empty()
    }

    #[allow(clippy::expect_used)]
    fn lock_buffer(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.buffer.lock().expect("lock poisoned")
    }
}
