// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Buffering limits for the batching collector.

/// Maximum number of log entries buffered before the oldest are dropped.
///
/// Assuming an average entry of ~1KB, this bounds the buffer at roughly
/// 100MB of logs between flushes. The limit is fixed for the lifetime of a
/// collector; truncation past it happens synchronously on `record()`.
pub const DEFAULT_CAPACITY: usize = 100_000;
