// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the callable plumbing itself, as opposed to failures of
//! the targets being wrapped.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// A recursive call was made before a wrapper was bound, or after it was dropped.
    #[error("recursive call through an unbound self reference")]
    Unbound,

    /// A self reference can only be bound once.
    #[error("self reference is already bound")]
    AlreadyBound,
}
