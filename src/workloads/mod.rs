// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sample targets used to exercise the decorators.

pub mod arithmetic;
pub mod fibonacci;
pub mod greetings;

pub use arithmetic::divide;
pub use fibonacci::{fib_call_count, fib_rec, fibonacci, FIB_REC_DOC};
pub use greetings::{my_function, say_hello};
