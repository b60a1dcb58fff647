// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Destinations for the observable output of decorators.
//!
//! The text is illustrative, not a compatibility contract. Tests inspect the
//! [`Notification`] values recorded by a [`RecordingSink`] instead of
//! scraping stdout.

use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// One observable event emitted by a wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Starting { callable: String },
    Finished { callable: String },
    Failed { callable: String, message: String },
    Arguments { values: Vec<String> },
    Timed { callable: String, elapsed: Duration },
}

impl Notification {
    pub fn starting(callable: &str) -> Self {
        Self::Starting {
            callable: callable.to_string(),
        }
    }

    pub fn finished(callable: &str) -> Self {
        Self::Finished {
            callable: callable.to_string(),
        }
    }

    pub fn failed(callable: &str, error: &anyhow::Error) -> Self {
        Self::Failed {
            callable: callable.to_string(),
            message: error.to_string(),
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Notification::Starting { callable } => write!(f, "Starting {callable}"),
            Notification::Finished { callable } => write!(f, "Finished {callable}"),
            Notification::Failed { callable, message } => {
                write!(f, "An exception occurred in {callable}: {message}")
            }
            Notification::Arguments { values } => {
                write!(f, "Decorator arguments: {}", values.join(", "))
            }
            Notification::Timed { callable, elapsed } => write!(f, "{callable} took {elapsed:?}"),
        }
    }
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Prints each notification on its own line, like the console output of the
/// original walkthrough.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn notify(&self, notification: &Notification) {
        if let Err(error) = write_notification(&mut io::stdout().lock(), notification) {
            tracing::debug!(error = %error, "dropped notification: {}", notification);
        }
    }
}

/// One notification, one line. A closed stream is an error, never a panic.
fn write_notification(out: &mut impl Write, notification: &Notification) -> io::Result<()> {
    writeln!(out, "{notification}")
}

/// Routes notifications into the `tracing` subscriber at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &Notification) {
        tracing::info!(target: "the_decorator::notification", "{}", notification);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl NotificationSink for SilentSink {
    fn notify(&self, _notification: &Notification) {}
}

/// Keeps every notification in order. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rendered lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.notifications().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: &Notification) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
    }
}

/// The sink decorators use unless told otherwise.
pub fn default_sink() -> Arc<dyn NotificationSink> {
    Arc::new(StdoutSink)
}
