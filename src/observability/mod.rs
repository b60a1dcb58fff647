// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability for the decorator library.
//!
//! Two separate channels exist:
//!
//! * `messages` - structured diagnostic logging through `tracing`. Every
//!   message type implements `Display` and [`messages::StructuredLog`], so
//!   the wording lives in one place instead of being scattered as string
//!   literals.
//! * `sink` - the observable output of the logging, failure-interception,
//!   argument and timing decorators ("Starting say_hello", "An exception
//!   occurred in divide: division by zero"). Where it goes is chosen per
//!   decorator through a [`sink::NotificationSink`].
//!
//! # Usage
//!
//! ```rust
//! use the_decorator::observability::messages::{call::CallStarting, StructuredLog};
//!
//! let msg = CallStarting { callable: "say_hello" };
//! msg.log();
//! ```

pub mod messages;
pub mod sink;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when it is set, `default_filter` otherwise.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// The fmt subscriber the binary installs, writing to `writer`.
///
/// Diagnostics never share a stream with notifications, so the binary hands
/// this stderr while the stdout sink owns stdout.
pub fn fmt_subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Install the global fmt subscriber on stderr.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing(default_filter: &str) {
    let _ = fmt_subscriber(env_filter(default_filter), std::io::stderr).try_init();
}

/// In-memory log destination for subscriber tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl CapturedLog {
    pub(crate) fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
