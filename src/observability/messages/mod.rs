// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `call` - wrapper invocation events (start, finish, failure, counting, timing)
//! * `config` - configuration loading and walkthrough progress

use tracing::Span;

pub mod call;
pub mod config;

/// A message that knows how to log itself with structured fields.
pub trait StructuredLog {
    /// Emit the message at its designated level.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
