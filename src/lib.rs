// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod callable;      // targets, descriptors, recursion
pub mod config;        // walkthrough configuration
pub mod decorators;    // the wrapping utilities
pub mod errors;        // error handling
pub mod observability;
pub mod traits;        // unified abstractions
pub mod walkthrough;   // guided tour used by the binary
pub mod workloads;     // sample targets
