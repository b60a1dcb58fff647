// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The uniform callable abstraction every target and wrapper implements.
//!
//! A callable takes one structured argument bundle (a single value or a
//! tuple) and returns one value or one failure. Wrappers never look at the
//! shape of `Args`; they forward it unchanged.

use std::rc::Rc;
use std::sync::Arc;

use crate::callable::CallableDescriptor;

/// Result of invoking a callable.
///
/// The failure type is erased so a target may fail with any error kind and a
/// wrapper can treat every kind the same way.
pub type CallResult<T> = anyhow::Result<T>;

/// Introspectable identity of a callable, independent of its arity.
pub trait Described {
    fn descriptor(&self) -> &CallableDescriptor;

    fn name(&self) -> &str {
        self.descriptor().name()
    }

    fn doc(&self) -> Option<&str> {
        self.descriptor().doc()
    }
}

pub trait Callable<Args>: Described {
    type Output;

    fn call(&self, args: Args) -> CallResult<Self::Output>;
}

impl<T: Described + ?Sized> Described for &T {
    fn descriptor(&self) -> &CallableDescriptor {
        (**self).descriptor()
    }
}

impl<A, T: Callable<A> + ?Sized> Callable<A> for &T {
    type Output = T::Output;

    fn call(&self, args: A) -> CallResult<Self::Output> {
        (**self).call(args)
    }
}

impl<T: Described + ?Sized> Described for Box<T> {
    fn descriptor(&self) -> &CallableDescriptor {
        (**self).descriptor()
    }
}

impl<A, T: Callable<A> + ?Sized> Callable<A> for Box<T> {
    type Output = T::Output;

    fn call(&self, args: A) -> CallResult<Self::Output> {
        (**self).call(args)
    }
}

impl<T: Described + ?Sized> Described for Arc<T> {
    fn descriptor(&self) -> &CallableDescriptor {
        (**self).descriptor()
    }
}

impl<A, T: Callable<A> + ?Sized> Callable<A> for Arc<T> {
    type Output = T::Output;

    fn call(&self, args: A) -> CallResult<Self::Output> {
        (**self).call(args)
    }
}

impl<T: Described + ?Sized> Described for Rc<T> {
    fn descriptor(&self) -> &CallableDescriptor {
        (**self).descriptor()
    }
}

impl<A, T: Callable<A> + ?Sized> Callable<A> for Rc<T> {
    type Output = T::Output;

    fn call(&self, args: A) -> CallResult<Self::Output> {
        (**self).call(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::FnTarget;

    fn double() -> FnTarget<impl Fn(i64) -> CallResult<i64>> {
        FnTarget::new("double", |n: i64| -> CallResult<i64> { Ok(n * 2) }).with_doc("Doubles its input.")
    }

    #[test]
    fn test_smart_pointers_forward_calls_and_identity() {
        let shared: Arc<dyn Callable<i64, Output = i64> + Send + Sync> = Arc::new(double());
        assert_eq!(shared.call(21).unwrap(), 42);
        assert_eq!(shared.name(), "double");
        assert_eq!(shared.doc(), Some("Doubles its input."));

        let boxed: Box<dyn Callable<i64, Output = i64>> = Box::new(double());
        assert_eq!(boxed.call(4).unwrap(), 8);

        let target = double();
        let by_ref = &target;
        assert_eq!(by_ref.call(-3).unwrap(), -6);
        assert_eq!(by_ref.name(), "double");
    }
}
