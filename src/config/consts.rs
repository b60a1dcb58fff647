/// Rows printed in the Fibonacci table section
pub const DEFAULT_FIB_TABLE_SIZE: u64 = 10;
/// Largest Fibonacci input the walkthrough accepts unless configured otherwise
pub const DEFAULT_FIB_MAX_INPUT: u64 = 35;
/// Hard ceiling for naive recursion (fib(40) already takes ~330 million calls)
pub const MAX_FIB_INPUT: u64 = 40;
/// Inputs for the counting section: one calculation, then another on the same counter
pub const DEFAULT_FIB_INPUTS: [u64; 2] = [20, 30];
/// Default `tracing` filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_GREETING: &str = "Alice";
pub const DEFAULT_DECORATOR_ARGUMENTS: [&str; 2] = ["Hallo", "World"];
