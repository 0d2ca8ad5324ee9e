// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Delivery contract between the collector and an export destination.

use async_trait::async_trait;

use crate::entry::LogEntry;
use crate::error::SinkError;

/// Destination for flushed batches of log entries.
///
/// The collector is agnostic to the transport behind this trait — an HTTP
/// intake, a file appender, a channel to another task. A sink is supplied at
/// collector construction and invoked only from `flush()`.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Delivers one batch of entries, oldest first.
    ///
    /// An `Err` means the batch was not durably delivered; the collector
    /// leaves its buffer untouched so the same entries are retried on the
    /// next flush. Any `Ok(())` is treated as success.
    async fn flush_logs(&self, logs: Vec<LogEntry>) -> Result<(), SinkError>;
}
