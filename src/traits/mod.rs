// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod callable;
pub mod decorator;

pub use callable::{CallResult, Callable, Described};
pub use decorator::{decorator_fn, identity, CallableExt, Decorator, DecoratorExt, DecoratorFn, Identity, Stack};
