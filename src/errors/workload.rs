// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failures raised by the sample workloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("division by zero")]
    DivisionByZero,

    /// Fibonacci value no longer fits in a `u64`.
    #[error("fibonacci({n}) overflows u64")]
    Overflow { n: u64 },
}
