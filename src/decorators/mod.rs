// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The wrapping utilities.
//!
//! | Constructor | Behavior |
//! |-------------|----------|
//! | [`call_counter`] | counts invocations through the wrapper |
//! | [`call_counter_via_wraps`] | same, keeping the target's name and documentation |
//! | [`logging`] | "Starting" / "Finished" around each call |
//! | [`catch_exceptions`] | swallows every failure, returns `None` |
//! | [`with_arguments`] | parameterized: announces captured arguments |
//! | [`timed`] | measures each call |
//! | [`preserving`] | adapts any of the above to keep the target's name and documentation |
//!
//! Count, logging and timing wrappers propagate target failures unchanged.
//! Only [`catch_exceptions`] recovers from them.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use the_decorator::decorators::{call_counter, logging};
//! use the_decorator::observability::sink::RecordingSink;
//! use the_decorator::traits::{Callable, Decorator};
//! use the_decorator::workloads::say_hello;
//!
//! let sink = RecordingSink::new();
//! let greet = logging()
//!     .with_sink(Arc::new(sink.clone()))
//!     .decorate(call_counter().decorate(say_hello()));
//!
//! assert_eq!(greet.call("Alice".to_string()).unwrap(), "Hello, Alice!");
//! assert_eq!(greet.target().calls(), 1);
//! // The inner wrapper kept its helper identity, so that is what the outer one sees.
//! assert_eq!(sink.lines(), vec!["Starting helper", "Finished helper"]);
//! ```

pub mod arguments;
pub mod catch_exceptions;
pub mod counting;
pub mod logging;
pub mod timing;
pub mod wrapper;


pub use arguments::{with_arguments, AnnounceArguments};
pub use catch_exceptions::{catch_exceptions, CatchExceptions};
pub use counting::{call_counter, call_counter_via_wraps, CallCount, CallCounter};
pub use logging::{logging, Logging};
pub use timing::{timed, Timed, Timing};
pub use wrapper::{preserving, Decorate, Decoration, Notifying, Preserving, Wrapper};
