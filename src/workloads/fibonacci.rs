// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Naive recursive Fibonacci, kept slow on purpose.
//!
//! The number of calls grows exponentially with `n`, which is what makes a
//! call counter worth having. Nothing here memoizes.

use crate::callable::{FnTarget, Recurse};
use crate::errors::WorkloadError;
use crate::traits::CallResult;

pub const FIB_REC_NAME: &str = "fib_rec";
pub const FIB_REC_DOC: &str = "Naive recurse implementation to compute the Fibonacci numbers.";

/// The recursive target. Inner calls go through `recurse`, so binding a
/// wrapper into it makes every call pass through that wrapper.
///
/// Use [`crate::callable::recursive`] to build and bind it in one step.
pub fn fib_rec(recurse: Recurse<u64, u64>) -> FnTarget<impl Fn(u64) -> CallResult<u64>> {
    FnTarget::new(FIB_REC_NAME, move |n: u64| -> CallResult<u64> {
        match n {
            0 | 1 => Ok(n),
            _ => {
                let a = recurse.call(n - 1)?;
                let b = recurse.call(n - 2)?;
                a.checked_add(b)
                    .ok_or_else(|| WorkloadError::Overflow { n }.into())
            }
        }
    })
    .with_doc(FIB_REC_DOC)
}

/// Iterative reference value, used to check the recursive target.
pub fn fibonacci(n: u64) -> Result<u64, WorkloadError> {
    let (mut current, mut next) = (0u64, Some(1u64));
    for _ in 0..n {
        let advanced = next.ok_or(WorkloadError::Overflow { n })?;
        next = current.checked_add(advanced);
        current = advanced;
    }
    Ok(current)
}

/// Number of calls naive recursion makes to compute `fib(n)`, the outermost
/// call included. Saturates at `u64::MAX`.
pub fn fib_call_count(n: u64) -> u64 {
    let (mut prev, mut current) = (1u64, 1u64);
    for _ in 1..n {
        let next = current.saturating_add(prev).saturating_add(1);
        prev = current;
        current = next;
    }
    current
}
