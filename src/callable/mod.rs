// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod descriptor;
mod fn_target;
mod recurse;

pub use descriptor::CallableDescriptor;
pub use fn_target::{infallible_target, FnTarget};
pub use recurse::{recursive, Recurse};
