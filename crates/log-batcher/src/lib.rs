// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Capacity-bounded in-memory batching of structured log events.
//!
//! Log events are converted into flat [`entry::LogEntry`] mappings and
//! accumulated in an ordered buffer until an explicit flush hands them to a
//! [`sink::LogSink`]. The buffer is bounded: once it grows past its capacity,
//! the oldest entries are dropped so a runaway producer cannot exhaust memory.
//!
//! # Pipeline
//!
//! ```text
//!   producer ──record()──> BatchingCollector ──flush()──> LogSink
//!                               │
//!                        (truncate oldest
//!                         past capacity)
//! ```
//!
//! Flushing is driven externally, typically on a timer; [`flusher::PeriodicFlusher`]
//! provides that driver. A failed flush leaves the buffer untouched so the
//! next tick retries the same entries.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod collector;
pub mod constants;
pub mod entry;
pub mod error;
pub mod flusher;
pub mod sink;

pub use collector::BatchingCollector;
pub use entry::{format_entry, ExceptionInfo, LogEntry, LogEvent};
pub use error::SinkError;
pub use flusher::PeriodicFlusher;
pub use sink::LogSink;
