// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Errors a sink can signal when a batch could not be delivered.
///
/// The collector treats every variant the same way: the flushed entries stay
/// buffered and the caller may retry.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The batch could not be serialized or otherwise prepared for delivery.
    #[error("Failed to build payload: {0}")]
    Payload(String),

    /// The destination rejected the batch or was unreachable.
    #[error("Failed to deliver batch: {0}")]
    Delivery(String),

    /// Any other sink-side failure.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
