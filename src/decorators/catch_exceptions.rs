// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Failure interception.
//!
//! Any error a target returns is caught, reported, and turned into `None`.
//! The catch is deliberately non-selective: the caller never learns what
//! failed or why, only that no value came back. Narrowing it changes the
//! behavior callers rely on.
//!
//! Panics are not errors and are not caught.

use std::sync::Arc;

use crate::callable::CallableDescriptor;
use crate::decorators::logging::WRAPPER_HELPER_NAME;
use crate::decorators::wrapper::{Decorate, Decoration, Notifying};
use crate::observability::messages::{call::CallFailed, StructuredLog};
use crate::observability::sink::{default_sink, Notification, NotificationSink};
use crate::traits::CallResult;

pub struct CatchExceptions {
    sink: Arc<dyn NotificationSink>,
}

impl Default for CatchExceptions {
    fn default() -> Self {
        Self {
            sink: default_sink(),
        }
    }
}

impl Notifying for CatchExceptions {
    fn set_sink(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sink = sink;
    }
}

impl<O> Decoration<O> for CatchExceptions {
    type Output = Option<O>;

    fn around<F>(&self, target: &CallableDescriptor, invoke: F) -> CallResult<Option<O>>
    where
        F: FnOnce() -> CallResult<O>,
    {
        match invoke() {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                CallFailed {
                    callable: target.name(),
                    error: &error,
                }
                .log();
                self.sink.notify(&Notification::failed(target.name(), &error));
                Ok(None)
            }
        }
    }
}

pub fn catch_exceptions() -> Decorate<CatchExceptions> {
    Decorate::new(CatchExceptions::default(), WRAPPER_HELPER_NAME)
}
