// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::MAX_FIB_INPUT;
use crate::config::WalkthroughConfig;
use crate::errors::ValidationError;

/// Validates a walkthrough configuration.
///
/// Naive Fibonacci makes `2 * fib(n + 1) - 1` calls, so every input is
/// checked against `fib.max_input`, and `fib.max_input` itself against
/// [`MAX_FIB_INPUT`]. The parameterized decorator needs at least one
/// argument.
///
/// # Error Accumulation
///
/// All problems are collected and returned together rather than stopping at
/// the first one.
pub fn validate_config(config: &WalkthroughConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(fib_errors) = validate_fib_inputs(config) {
        errors.extend(fib_errors);
    }

    if config.decorator_arguments.is_empty() {
        errors.push(ValidationError::EmptyArguments);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_fib_inputs(config: &WalkthroughConfig) -> Result<(), Vec<ValidationError>> {
    let fib = &config.fib;
    let mut errors = Vec::new();

    if fib.max_input > MAX_FIB_INPUT {
        errors.push(ValidationError::MaxInputAboveLimit {
            max_input: fib.max_input,
            limit: MAX_FIB_INPUT,
        });
    }

    let max_input = fib.max_input.min(MAX_FIB_INPUT);

    if fib.table_size > max_input {
        errors.push(ValidationError::FibonacciInputTooLarge {
            field: "fib.table_size",
            input: fib.table_size,
            max_input,
        });
    }

    for &input in &fib.inputs {
        if input > max_input {
            errors.push(ValidationError::FibonacciInputTooLarge {
                field: "fib.inputs",
                input,
                max_input,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FibConfig;

    fn config_with_fib(table_size: u64, inputs: Vec<u64>, max_input: u64) -> WalkthroughConfig {
        WalkthroughConfig {
            fib: FibConfig {
                table_size,
                inputs,
                max_input,
            },
            ..WalkthroughConfig::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&WalkthroughConfig::default()).is_ok());
    }

    #[test]
    fn test_inputs_at_the_ceiling_are_valid() {
        let config = config_with_fib(30, vec![30, 30], 30);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_every_oversized_input_is_reported() {
        let config = config_with_fib(12, vec![5, 11, 25], 10);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::FibonacciInputTooLarge {
                    field: "fib.table_size",
                    input: 12,
                    max_input: 10,
                },
                ValidationError::FibonacciInputTooLarge {
                    field: "fib.inputs",
                    input: 11,
                    max_input: 10,
                },
                ValidationError::FibonacciInputTooLarge {
                    field: "fib.inputs",
                    input: 25,
                    max_input: 10,
                },
            ]
        );
    }

    #[test]
    fn test_max_input_above_hard_limit() {
        let config = config_with_fib(10, vec![45], 60);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MaxInputAboveLimit {
                    max_input: 60,
                    limit: MAX_FIB_INPUT,
                },
                ValidationError::FibonacciInputTooLarge {
                    field: "fib.inputs",
                    input: 45,
                    max_input: MAX_FIB_INPUT,
                },
            ]
        );
    }

    #[test]
    fn test_errors_accumulate_across_fields() {
        let config = WalkthroughConfig {
            decorator_arguments: vec![],
            ..config_with_fib(10, vec![99], 35)
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::EmptyArguments));
    }
}
