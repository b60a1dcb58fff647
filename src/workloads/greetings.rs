// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::callable::{infallible_target, FnTarget};
use crate::traits::CallResult;

/// `say_hello(name)` returns the greeting instead of printing it, so callers
/// decide where it goes.
pub fn say_hello() -> FnTarget<impl Fn(String) -> CallResult<String>> {
    infallible_target("say_hello", |name: String| format!("Hello, {name}!"))
        .with_doc("Greet someone by name.")
}

/// A target without arguments, used with the parameterized decorator.
pub fn my_function() -> FnTarget<impl Fn(()) -> CallResult<&'static str>> {
    infallible_target("my_function", |_: ()| "Hello, world!")
}
