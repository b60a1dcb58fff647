// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while validating a walkthrough configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A Fibonacci input exceeds the configured ceiling.
    #[error("fib input {input} ({field}) exceeds max_input {max_input}")]
    FibonacciInputTooLarge {
        field: &'static str,
        input: u64,
        max_input: u64,
    },

    /// The configured ceiling exceeds the hard limit for naive recursion.
    #[error("fib.max_input {max_input} exceeds the hard limit of {limit}")]
    MaxInputAboveLimit { max_input: u64, limit: u64 },

    /// A parameterized decorator needs at least one argument.
    #[error("decorator_arguments must not be empty")]
    EmptyArguments,

    /// A section name that the walkthrough does not know.
    #[error("unknown section '{name}' (expected one of: {expected})")]
    UnknownSection { name: String, expected: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("configuration validation failed:\n{}", join_lines(.0))]
    Validation(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
