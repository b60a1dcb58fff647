// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for wrapper invocation events.
//!
//! This module contains message types for logging events related to:
//! * Invocation lifecycle through a wrapper (start, finish)
//! * Failures swallowed by the failure-interception decorator
//! * Call counting and timing
//! * Decorator arguments announced on invocation

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A wrapped call is about to invoke its target.
///
/// # Log Level
/// `debug!` - The observable "Starting" line goes to the notification sink
///
/// # Example
/// ```
/// use the_decorator::observability::messages::call::CallStarting;
///
/// let msg = CallStarting { callable: "say_hello" };
/// assert_eq!(msg.to_string(), "Call to 'say_hello' starting");
/// ```
pub struct CallStarting<'a> {
    pub callable: &'a str,
}

impl Display for CallStarting<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Call to '{}' starting", self.callable)
    }
}

impl StructuredLog for CallStarting<'_> {
    fn log(&self) {
        tracing::debug!(callable = self.callable, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("call", span_name = name, callable = self.callable)
    }
}

/// A wrapped call returned normally.
///
/// # Log Level
/// `debug!`
pub struct CallFinished<'a> {
    pub callable: &'a str,
}

impl Display for CallFinished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Call to '{}' finished", self.callable)
    }
}

impl StructuredLog for CallFinished<'_> {
    fn log(&self) {
        tracing::debug!(callable = self.callable, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("call", span_name = name, callable = self.callable)
    }
}

/// A target failed and the failure was swallowed.
///
/// # Log Level
/// `debug!` - The notification sink already reports the failure once; this
/// is the diagnostic trail behind it
///
/// # Example
/// ```
/// use the_decorator::observability::messages::call::CallFailed;
///
/// let error = anyhow::anyhow!("division by zero");
/// let msg = CallFailed { callable: "divide", error: &error };
/// assert_eq!(msg.to_string(), "Call to 'divide' failed and was intercepted: division by zero");
/// ```
pub struct CallFailed<'a> {
    pub callable: &'a str,
    pub error: &'a anyhow::Error,
}

impl Display for CallFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Call to '{}' failed and was intercepted: {}",
            self.callable, self.error
        )
    }
}

impl StructuredLog for CallFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            callable = self.callable,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "call",
            span_name = name,
            callable = self.callable,
            error = %self.error,
        )
    }
}

/// A counting wrapper recorded one more invocation.
///
/// # Log Level
/// `trace!` - Fires once per recursive call, far too chatty for anything else
pub struct CallCounted<'a> {
    pub callable: &'a str,
    pub calls: u64,
}

impl Display for CallCounted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Call to '{}' counted: calls={}", self.callable, self.calls)
    }
}

impl StructuredLog for CallCounted<'_> {
    fn log(&self) {
        tracing::trace!(callable = self.callable, calls = self.calls, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "call",
            span_name = name,
            callable = self.callable,
            calls = self.calls,
        )
    }
}

/// A parameterized wrapper announced its captured arguments.
///
/// # Log Level
/// `debug!`
///
/// # Example
/// ```
/// use the_decorator::observability::messages::call::DecoratorArgumentsApplied;
///
/// let arguments = vec!["Hallo".to_string(), "World".to_string()];
/// let msg = DecoratorArgumentsApplied { callable: "my_function", arguments: &arguments };
/// assert_eq!(msg.to_string(), "Call to 'my_function' with decorator arguments [Hallo, World]");
/// ```
pub struct DecoratorArgumentsApplied<'a> {
    pub callable: &'a str,
    pub arguments: &'a [String],
}

impl Display for DecoratorArgumentsApplied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Call to '{}' with decorator arguments [{}]",
            self.callable,
            self.arguments.join(", ")
        )
    }
}

impl StructuredLog for DecoratorArgumentsApplied<'_> {
    fn log(&self) {
        tracing::debug!(
            callable = self.callable,
            argument_count = self.arguments.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "call",
            span_name = name,
            callable = self.callable,
            argument_count = self.arguments.len(),
        )
    }
}

/// A timed wrapper measured one invocation.
///
/// # Log Level
/// `debug!`
pub struct CallTimed<'a> {
    pub callable: &'a str,
    pub elapsed: Duration,
}

impl Display for CallTimed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Call to '{}' completed: duration={:?}",
            self.callable, self.elapsed
        )
    }
}

impl StructuredLog for CallTimed<'_> {
    fn log(&self) {
        tracing::debug!(
            callable = self.callable,
            elapsed_us = self.elapsed.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "call",
            span_name = name,
            callable = self.callable,
            elapsed_us = self.elapsed.as_micros() as u64,
        )
    }
}
