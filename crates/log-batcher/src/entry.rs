// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Log event types and their conversion into the wire entry form.
//!
//! [`format_entry`] is a pure function over an owned [`LogEvent`]; it does
//! not consult any ambient logging framework state, so the same event always
//! produces the same entry.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A structured log event as captured at the emission site.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// The log message content.
    pub message: String,
    /// Severity name (e.g. "INFO", "ERROR"). Passed through as-is.
    pub level: String,
    /// Seconds since the Unix epoch at which the event was created,
    /// with sub-second precision.
    pub created: f64,
    /// Identity of the logger that emitted the event.
    pub logger_name: String,
    /// Error details attached to the event, if any.
    pub exception: Option<ExceptionInfo>,
}

/// Captured error details attached to a [`LogEvent`].
#[derive(Debug, Clone, Default)]
pub struct ExceptionInfo {
    /// Error type name, e.g. `io::Error`.
    pub kind: String,
    /// Error display message.
    pub message: String,
    /// Captured backtrace text, if one was collected.
    pub backtrace: Option<String>,
    /// Traceback already rendered at the emission site. Reused verbatim
    /// instead of formatting the fields above again.
    pub rendered: Option<String>,
}

/// The stored and transmitted form of a log event.
///
/// A sink receives entries as a mapping with exactly these five text-valued
/// keys. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub level: String,
    /// ISO-8601 UTC timestamp, no timezone suffix. Fractional seconds are
    /// rendered with microsecond precision and omitted when zero.
    pub timestamp: String,
    pub logger_name: String,
    /// Rendered traceback, or the empty string when the event carried none.
    pub exception: String,
}

/// Converts an event into its wire entry.
#[must_use]
pub fn format_entry(event: &LogEvent) -> LogEntry {
    LogEntry {
        message: event.message.clone(),
        level: event.level.clone(),
        timestamp: format_timestamp(event.created),
        logger_name: event.logger_name.clone(),
        exception: event
            .exception
            .as_ref()
            .map(format_exception)
            .unwrap_or_default(),
    }
}

/// Renders epoch seconds as an ISO-8601 UTC timestamp.
fn format_timestamp(created: f64) -> String {
    let mut secs = created.floor() as i64;
    let mut micros = ((created - secs as f64) * 1_000_000.0).round() as i64;
    if micros >= 1_000_000 {
        secs += 1;
        micros = 0;
    }
    let datetime = DateTime::from_timestamp(secs, (micros * 1_000) as u32)
        .unwrap_or(DateTime::UNIX_EPOCH);
    if micros == 0 {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Renders the traceback text for an exception, preferring the cached form.
fn format_exception(info: &ExceptionInfo) -> String {
    if let Some(rendered) = info.rendered.as_deref() {
        if !rendered.is_empty() {
            return rendered.to_string();
        }
    }
    let mut text = if info.kind.is_empty() {
        info.message.clone()
    } else {
        format!("{}: {}", info.kind, info.message)
    };
    if let Some(backtrace) = info.backtrace.as_deref() {
        text.push('\n');
        text.push_str(backtrace);
    }
    text
}
