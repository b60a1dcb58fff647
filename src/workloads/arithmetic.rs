// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::callable::FnTarget;
use crate::errors::WorkloadError;
use crate::traits::CallResult;

/// `divide((a, b))` computes `a / b` and fails when `b` is zero.
pub fn divide() -> FnTarget<impl Fn((f64, f64)) -> CallResult<f64>> {
    FnTarget::new("divide", |(a, b): (f64, f64)| -> CallResult<f64> {
        if b == 0.0 {
            return Err(WorkloadError::DivisionByZero.into());
        }
        Ok(a / b)
    })
}
