// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::callable::CallableDescriptor;
use crate::decorators::wrapper::{Decorate, Decoration, Notifying};
use crate::observability::messages::{
    call::{CallFinished, CallStarting},
    StructuredLog,
};
use crate::observability::sink::{default_sink, Notification, NotificationSink};
use crate::traits::CallResult;

pub const WRAPPER_HELPER_NAME: &str = "wrapper";

/// Announces "Starting" before and "Finished" after each call.
///
/// "Finished" is only emitted on normal return; a failure propagates without it.
pub struct Logging {
    sink: Arc<dyn NotificationSink>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            sink: default_sink(),
        }
    }
}

impl Notifying for Logging {
    fn set_sink(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sink = sink;
    }
}

impl<O> Decoration<O> for Logging {
    type Output = O;

    fn around<F>(&self, target: &CallableDescriptor, invoke: F) -> CallResult<O>
    where
        F: FnOnce() -> CallResult<O>,
    {
        let start_msg = CallStarting {
            callable: target.name(),
        };
        let span = start_msg.span("logging");
        let _guard = span.enter();

        start_msg.log();
        self.sink.notify(&Notification::starting(target.name()));

        let result = invoke()?;

        CallFinished {
            callable: target.name(),
        }
        .log();
        self.sink.notify(&Notification::finished(target.name()));

        Ok(result)
    }
}

pub fn logging() -> Decorate<Logging> {
    Decorate::new(Logging::default(), WRAPPER_HELPER_NAME)
}
