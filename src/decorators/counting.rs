// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::callable::CallableDescriptor;
use crate::decorators::wrapper::{Decorate, Decoration, Wrapper};
use crate::observability::messages::{call::CallCounted, StructuredLog};
use crate::traits::CallResult;

pub const COUNTER_HELPER_NAME: &str = "helper";

/// Invocation counter owned by one wrapper. Clones observe the same count.
#[derive(Debug, Clone, Default)]
pub struct CallCount(Arc<AtomicU64>);

impl CallCount {
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Counts every invocation made through the wrapper, including ones that fail.
#[derive(Debug, Default)]
pub struct CallCounter {
    count: CallCount,
}

impl CallCounter {
    pub fn count(&self) -> CallCount {
        self.count.clone()
    }
}

impl<O> Decoration<O> for CallCounter {
    type Output = O;

    fn around<F>(&self, target: &CallableDescriptor, invoke: F) -> CallResult<O>
    where
        F: FnOnce() -> CallResult<O>,
    {
        let calls = self.count.increment();
        CallCounted {
            callable: target.name(),
            calls,
        }
        .log();
        invoke()
    }
}

impl Decorate<CallCounter> {
    /// Handle on the counter the next wrapper will own.
    pub fn count(&self) -> CallCount {
        self.decoration().count()
    }
}

impl<C> Wrapper<C, CallCounter> {
    pub fn calls(&self) -> u64 {
        self.decoration().count.get()
    }

    pub fn count(&self) -> CallCount {
        self.decoration().count()
    }
}

/// Count calls. Wrappers keep the helper identity; the target's documentation is lost.
pub fn call_counter() -> Decorate<CallCounter> {
    Decorate::new(CallCounter::default(), COUNTER_HELPER_NAME)
}

/// Count calls and carry the target's name and documentation.
pub fn call_counter_via_wraps() -> Decorate<CallCounter> {
    call_counter().preserving_metadata()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::{infallible_target, recursive, FnTarget};
    use crate::traits::{Callable, Decorator, Described};
    use crate::workloads::{fib_call_count, fib_rec};

    #[test]
    fn test_counter_starts_at_zero() {
        let counted = call_counter().decorate(infallible_target("noop", |_: ()| ()));
        assert_eq!(counted.calls(), 0);
    }

    #[test]
    fn test_counts_each_invocation_and_returns_result() {
        let counted = call_counter().decorate(infallible_target("triple", |n: i32| n * 3));
        assert_eq!(counted.call(2).unwrap(), 6);
        assert_eq!(counted.call(5).unwrap(), 15);
        assert_eq!(counted.calls(), 2);
    }

    #[test]
    fn test_counts_failing_invocations() {
        let failing = FnTarget::new("failing", |_: ()| -> CallResult<()> { anyhow::bail!("nope") });
        let counted = call_counter().decorate(failing);
        assert!(counted.call(()).is_err());
        assert!(counted.call(()).is_err());
        assert_eq!(counted.calls(), 2);
    }

    #[test]
    fn test_fib_five_counts_every_recursive_call() {
        let fib = recursive(fib_rec, call_counter()).unwrap();
        assert_eq!(fib.call(5).unwrap(), 5);
        assert_eq!(fib.calls(), 15);
        assert_eq!(fib.calls(), fib_call_count(5));
    }

    #[test]
    fn test_count_accumulates_across_calculations() {
        let fib = recursive(fib_rec, call_counter()).unwrap();
        fib.call(10).unwrap();
        let after_first = fib.calls();
        fib.call(10).unwrap();
        assert_eq!(fib.calls(), after_first * 2);
    }

    #[test]
    fn test_independent_wrappers_never_cross_increment() {
        let first = call_counter().decorate(infallible_target("id", |n: u8| n));
        let second = call_counter().decorate(infallible_target("id", |n: u8| n));

        first.call(1).unwrap();
        second.call(1).unwrap();
        first.call(2).unwrap();
        first.call(3).unwrap();

        assert_eq!(first.calls(), 3);
        assert_eq!(second.calls(), 1);
    }

    #[test]
    fn test_wrappers_sharing_one_target_count_separately() {
        let shared = Arc::new(infallible_target("id", |n: u8| n));
        let first = call_counter().decorate(Arc::clone(&shared));
        let second = call_counter().decorate(Arc::clone(&shared));

        first.call(1).unwrap();
        second.call(2).unwrap();
        first.call(3).unwrap();
        second.call(4).unwrap();
        first.call(5).unwrap();

        assert_eq!(first.calls(), 3);
        assert_eq!(second.calls(), 2);
    }

    #[test]
    fn test_count_handle_obtained_before_decoration() {
        let counter = call_counter();
        let handle = counter.count();
        let counted = counter.decorate(infallible_target("id", |n: u8| n));
        counted.call(9).unwrap();
        assert_eq!(handle.get(), 1);
        assert_eq!(counted.count().get(), 1);
    }

    #[test]
    fn test_plain_counter_loses_metadata() {
        let target = infallible_target("documented", |_: ()| ()).with_doc("Has docs.");
        let counted = call_counter().decorate(target);
        assert_eq!(counted.name(), "helper");
        assert_eq!(counted.doc(), None);
    }

    #[test]
    fn test_counter_via_wraps_keeps_metadata() {
        let target = infallible_target("documented", |_: ()| ()).with_doc("Has docs.");
        let counted = call_counter_via_wraps().decorate(target);
        assert_eq!(counted.name(), "documented");
        assert_eq!(counted.doc(), Some("Has docs."));
    }
}
