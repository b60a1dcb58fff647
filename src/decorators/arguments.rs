// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A decorator that takes arguments.
//!
//! `with_arguments(["Hallo", "World"])` captures the values first and returns
//! the decorator proper; applying that to a target produces the wrapper.

use std::sync::Arc;

use crate::callable::CallableDescriptor;
use crate::decorators::logging::WRAPPER_HELPER_NAME;
use crate::decorators::wrapper::{Decorate, Decoration, Notifying, Wrapper};
use crate::observability::messages::{call::DecoratorArgumentsApplied, StructuredLog};
use crate::observability::sink::{default_sink, Notification, NotificationSink};
use crate::traits::CallResult;

/// Announces its captured arguments on every call, then forwards.
pub struct AnnounceArguments {
    arguments: Vec<String>,
    sink: Arc<dyn NotificationSink>,
}

impl AnnounceArguments {
    pub fn new(arguments: Vec<String>) -> Self {
        Self {
            arguments,
            sink: default_sink(),
        }
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

impl Notifying for AnnounceArguments {
    fn set_sink(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sink = sink;
    }
}

impl<O> Decoration<O> for AnnounceArguments {
    type Output = O;

    fn around<F>(&self, target: &CallableDescriptor, invoke: F) -> CallResult<O>
    where
        F: FnOnce() -> CallResult<O>,
    {
        DecoratorArgumentsApplied {
            callable: target.name(),
            arguments: &self.arguments,
        }
        .log();
        self.sink.notify(&Notification::Arguments {
            values: self.arguments.clone(),
        });
        invoke()
    }
}

impl<C> Wrapper<C, AnnounceArguments> {
    /// The values captured when the decorator was configured.
    pub fn arguments(&self) -> &[String] {
        self.decoration().arguments()
    }
}

pub fn with_arguments<I, S>(arguments: I) -> Decorate<AnnounceArguments>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let arguments = arguments.into_iter().map(Into::into).collect();
    Decorate::new(AnnounceArguments::new(arguments), WRAPPER_HELPER_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::sink::RecordingSink;
    use crate::traits::{Callable, Decorator};
    use crate::workloads::my_function;

    #[test]
    fn test_announces_arguments_then_forwards() {
        let sink = RecordingSink::new();
        let decorated = with_arguments(["Hallo", "World"])
            .with_sink(Arc::new(sink.clone()))
            .decorate(my_function());

        assert_eq!(decorated.call(()).unwrap(), "Hello, world!");
        assert_eq!(sink.lines(), vec!["Decorator arguments: Hallo, World"]);
    }

    #[test]
    fn test_wrappers_with_different_arguments_are_independent() {
        let sink = RecordingSink::new();
        let hallo = with_arguments(["Hallo", "World"])
            .with_sink(Arc::new(sink.clone()))
            .decorate(my_function());
        let xy = with_arguments(["X", "Y"])
            .with_sink(Arc::new(sink.clone()))
            .decorate(my_function());

        hallo.call(()).unwrap();
        xy.call(()).unwrap();
        hallo.call(()).unwrap();
        xy.call(()).unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "Decorator arguments: Hallo, World",
                "Decorator arguments: X, Y",
                "Decorator arguments: Hallo, World",
                "Decorator arguments: X, Y",
            ]
        );
        assert_eq!(hallo.arguments(), ["Hallo", "World"]);
        assert_eq!(xy.arguments(), ["X", "Y"]);
    }
}
