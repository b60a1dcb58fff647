// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::callable::CallableDescriptor;
use crate::traits::{CallResult, Callable, Described};

/// A target callable built from a closure and its descriptor.
pub struct FnTarget<F> {
    descriptor: CallableDescriptor,
    f: F,
}

impl<F> FnTarget<F> {
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            descriptor: CallableDescriptor::new(name),
            f,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.descriptor = self.descriptor.with_doc(doc);
        self
    }
}

/// Build a target from a closure that cannot fail.
pub fn infallible_target<A, O, G>(
    name: impl Into<String>,
    g: G,
) -> FnTarget<impl Fn(A) -> CallResult<O>>
where
    G: Fn(A) -> O,
{
    FnTarget::new(name, move |args: A| -> CallResult<O> { Ok(g(args)) })
}

impl<F> Described for FnTarget<F> {
    fn descriptor(&self) -> &CallableDescriptor {
        &self.descriptor
    }
}

impl<A, O, F> Callable<A> for FnTarget<F>
where
    F: Fn(A) -> CallResult<O>,
{
    type Output = O;

    fn call(&self, args: A) -> CallResult<O> {
        (self.f)(args)
    }
}

impl<F> std::fmt::Debug for FnTarget<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTarget")
            .field("descriptor", &self.descriptor)
            .finish()
    }
}
