// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Late-bound self references for recursive targets.
//!
//! A recursive target that calls itself directly bypasses any wrapper put
//! around it, so a call counter would only ever see the outermost call. A
//! recursive target instead calls through a [`Recurse`] handle, and the
//! outermost wrapper is bound into that handle once it exists. Every inner
//! call then travels through the whole decorator chain.
//!
//! The handle holds a weak reference: the wrapper owns the target, the target
//! does not keep the wrapper alive.

use std::sync::{Arc, OnceLock, Weak};

use crate::errors::CallError;
use crate::traits::{CallResult, Callable, Decorator};

type Bound<A, O> = dyn Callable<A, Output = O> + Send + Sync;

pub struct Recurse<A, O> {
    slot: Arc<OnceLock<Weak<Bound<A, O>>>>,
}

impl<A, O> Clone for Recurse<A, O> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<A, O> Default for Recurse<A, O> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<A, O> Recurse<A, O> {
    pub fn unbound() -> Self {
        Self {
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// Bind the callable that recursive calls go through. A handle binds once.
    pub fn bind(&self, target: &Arc<Bound<A, O>>) -> Result<(), CallError> {
        self.slot
            .set(Arc::downgrade(target))
            .map_err(|_| CallError::AlreadyBound)
    }

    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn call(&self, args: A) -> CallResult<O> {
        let target = self
            .slot
            .get()
            .and_then(Weak::upgrade)
            .ok_or(CallError::Unbound)?;
        target.call(args)
    }
}

impl<A, O> std::fmt::Debug for Recurse<A, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recurse")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Build a recursive target, decorate it, and bind the result as the target's
/// own recursion path.
///
/// ```
/// use the_decorator::callable::recursive;
/// use the_decorator::decorators::call_counter;
/// use the_decorator::traits::Callable;
/// use the_decorator::workloads::fib_rec;
///
/// let fib = recursive(fib_rec, call_counter()).unwrap();
/// assert_eq!(fib.call(5).unwrap(), 5);
/// assert_eq!(fib.calls(), 15);
/// ```
pub fn recursive<A, O, C, D, B>(build: B, decorator: D) -> Result<Arc<D::Wrapped>, CallError>
where
    B: FnOnce(Recurse<A, O>) -> C,
    D: Decorator<C>,
    D::Wrapped: Callable<A, Output = O> + Send + Sync + 'static,
    A: 'static,
    O: 'static,
{
    let recurse = Recurse::unbound();
    let wrapper = Arc::new(decorator.decorate(build(recurse.clone())));
    let bound: Arc<Bound<A, O>> = wrapper.clone();
    recurse.bind(&bound)?;
    Ok(wrapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::FnTarget;
    use crate::traits::identity;

    fn countdown(recurse: Recurse<u32, u32>) -> FnTarget<impl Fn(u32) -> CallResult<u32>> {
        FnTarget::new("countdown", move |n: u32| -> CallResult<u32> {
            if n == 0 {
                Ok(0)
            } else {
                Ok(1 + recurse.call(n - 1)?)
            }
        })
    }

    #[test]
    fn test_unbound_call_fails() {
        let recurse: Recurse<u32, u32> = Recurse::unbound();
        let err = recurse.call(1).unwrap_err();
        assert!(matches!(err.downcast_ref::<CallError>(), Some(CallError::Unbound)));
    }

    #[test]
    fn test_recursion_through_bound_target() {
        let countdown = recursive(countdown, identity()).unwrap();
        assert_eq!(countdown.call(10).unwrap(), 10);
    }

    #[test]
    fn test_binding_twice_fails() {
        let recurse: Recurse<u32, u32> = Recurse::unbound();
        let first: Arc<Bound<u32, u32>> = Arc::new(countdown(recurse.clone()));
        let second: Arc<Bound<u32, u32>> = Arc::new(countdown(recurse.clone()));
        recurse.bind(&first).unwrap();
        assert!(matches!(recurse.bind(&second), Err(CallError::AlreadyBound)));
    }

    #[test]
    fn test_dropped_wrapper_unbinds() {
        let recurse: Recurse<u32, u32> = Recurse::unbound();
        let target: Arc<Bound<u32, u32>> = Arc::new(countdown(recurse.clone()));
        recurse.bind(&target).unwrap();
        drop(target);
        assert!(recurse.is_bound());
        assert!(recurse.call(3).is_err());
    }
}
