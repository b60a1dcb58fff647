// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The generic wrapper every decorator in this crate produces.
//!
//! A [`Wrapper`] owns one target, one [`Decoration`] (the injected behavior
//! and its private state) and its own [`CallableDescriptor`]. The descriptor
//! starts out as the decorator's helper identity; [`Wrapper::wraps`] copies
//! the target's name and documentation over it.

use std::sync::Arc;

use crate::callable::CallableDescriptor;
use crate::observability::sink::NotificationSink;
use crate::traits::{CallResult, Callable, Decorator, Described};

/// Behavior injected around a single invocation.
///
/// `invoke` forwards the original arguments to the target. Implementations
/// call it at most once and decide what happens before, after, and on
/// failure.
pub trait Decoration<O> {
    type Output;

    fn around<F>(&self, target: &CallableDescriptor, invoke: F) -> CallResult<Self::Output>
    where
        F: FnOnce() -> CallResult<O>;
}

/// Decorations that report through a [`NotificationSink`].
pub trait Notifying {
    fn set_sink(&mut self, sink: Arc<dyn NotificationSink>);
}

pub struct Wrapper<C, D> {
    target: C,
    decoration: D,
    descriptor: CallableDescriptor,
}

impl<C, D> Wrapper<C, D> {
    pub fn new(target: C, decoration: D, descriptor: CallableDescriptor) -> Self {
        Self {
            target,
            decoration,
            descriptor,
        }
    }

    pub fn target(&self) -> &C {
        &self.target
    }

    pub fn decoration(&self) -> &D {
        &self.decoration
    }
}

impl<C: Described, D> Wrapper<C, D> {
    /// Copy the target's name and documentation onto this wrapper.
    pub fn wraps(mut self) -> Self {
        self.descriptor.copy_from(self.target.descriptor());
        self
    }
}

impl<C, D> Described for Wrapper<C, D> {
    fn descriptor(&self) -> &CallableDescriptor {
        &self.descriptor
    }
}

impl<A, C, D> Callable<A> for Wrapper<C, D>
where
    C: Callable<A>,
    D: Decoration<C::Output>,
{
    type Output = D::Output;

    fn call(&self, args: A) -> CallResult<D::Output> {
        let target = &self.target;
        self.decoration
            .around(target.descriptor(), move || target.call(args))
    }
}

impl<C: Described, D> std::fmt::Debug for Wrapper<C, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wrapper")
            .field("descriptor", &self.descriptor)
            .field("target", self.target.descriptor())
            .finish()
    }
}

/// A decorator built from a decoration and the helper identity its wrappers
/// start with.
pub struct Decorate<D> {
    decoration: D,
    helper: CallableDescriptor,
    preserve_metadata: bool,
}

impl<D> Decorate<D> {
    pub fn new(decoration: D, helper_name: &str) -> Self {
        Self {
            decoration,
            helper: CallableDescriptor::helper(helper_name),
            preserve_metadata: false,
        }
    }

    /// Make every wrapper produced by this decorator carry its target's name
    /// and documentation.
    pub fn preserving_metadata(mut self) -> Self {
        self.preserve_metadata = true;
        self
    }

    pub fn decoration(&self) -> &D {
        &self.decoration
    }
}

impl<D: Notifying> Decorate<D> {
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.decoration.set_sink(sink);
        self
    }
}

impl<C: Described, D> Decorator<C> for Decorate<D> {
    type Wrapped = Wrapper<C, D>;

    fn decorate(self, target: C) -> Wrapper<C, D> {
        let wrapper = Wrapper::new(target, self.decoration, self.helper);
        if self.preserve_metadata {
            wrapper.wraps()
        } else {
            wrapper
        }
    }
}

/// Adapts any decorator whose wrappers are [`Wrapper`]s so that each one
/// carries the name and documentation of the callable it was applied to.
#[derive(Debug, Clone, Copy)]
pub struct Preserving<D>(D);

pub fn preserving<D>(decorator: D) -> Preserving<D> {
    Preserving(decorator)
}

impl<C, D, T, X> Decorator<C> for Preserving<D>
where
    D: Decorator<C, Wrapped = Wrapper<T, X>>,
    T: Described,
{
    type Wrapped = Wrapper<T, X>;

    fn decorate(self, target: C) -> Wrapper<T, X> {
        self.0.decorate(target).wraps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorators::{call_counter, logging};
    use crate::observability::sink::RecordingSink;
    use crate::traits::DecoratorExt;
    use crate::callable::recursive;
    use crate::workloads::fibonacci::FIB_REC_NAME;
    use crate::workloads::{fib_call_count, fib_rec, say_hello};

    #[test]
    fn test_preserving_copies_target_metadata() {
        let greet = preserving(call_counter()).decorate(say_hello());

        assert_eq!(greet.name(), "say_hello");
        assert_eq!(greet.doc(), Some("Greet someone by name."));
        assert_eq!(greet.call("Bob".to_string()).unwrap(), "Hello, Bob!");
        assert_eq!(greet.calls(), 1);
    }

    #[test]
    fn test_preserving_recursive_target() {
        let fib = recursive(fib_rec, preserving(call_counter())).unwrap();

        assert_eq!(fib.name(), FIB_REC_NAME);
        assert_eq!(fib.call(6).unwrap(), 8);
        assert_eq!(fib.calls(), fib_call_count(6));
    }

    #[test]
    fn test_preserving_stack_copies_from_immediate_target() {
        let sink = RecordingSink::new();
        let composed = preserving(logging().with_sink(Arc::new(sink.clone())).stack(call_counter()))
            .decorate(say_hello());

        // The outer wrapper sees the counter's helper, not say_hello.
        assert_eq!(composed.name(), "helper");
        composed.call("Eve".to_string()).unwrap();
        assert_eq!(sink.lines(), vec!["Starting helper", "Finished helper"]);
    }
}
