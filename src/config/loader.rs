// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_DECORATOR_ARGUMENTS, DEFAULT_FIB_INPUTS, DEFAULT_FIB_MAX_INPUT,
    DEFAULT_FIB_TABLE_SIZE, DEFAULT_GREETING, DEFAULT_LOG_FILTER,
};
use crate::errors::{ConfigError, ValidationError};
use crate::observability::sink::{NotificationSink, SilentSink, StdoutSink, TracingSink};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Configuration for the decorator walkthrough.
///
/// Every field has a default, so an empty file (or no file at all) runs the
/// complete walkthrough with the values from the original notebook.
///
/// # Example
/// ```yaml
/// output: stdout
/// log_filter: info
/// sections: [counting, metadata, exceptions]
/// fib:
///   table_size: 10
///   inputs: [20, 30]
///   max_input: 35
/// greeting: Alice
/// divisions: [[4, 2], [4, 0]]
/// decorator_arguments: [Hallo, World]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WalkthroughConfig {
    pub output: OutputMode,
    pub log_filter: String,
    pub sections: Vec<Section>,
    pub fib: FibConfig,
    pub greeting: String,
    pub divisions: Vec<[f64; 2]>,
    pub decorator_arguments: Vec<String>,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            sections: Section::all().to_vec(),
            fib: FibConfig::default(),
            greeting: DEFAULT_GREETING.to_string(),
            divisions: vec![[4.0, 2.0], [4.0, 0.0]],
            decorator_arguments: DEFAULT_DECORATOR_ARGUMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Fibonacci workload sizes.
///
/// # Fields
/// * `table_size` - how many values the table section prints (`fib(0)..fib(table_size)`)
/// * `inputs` - computed one after another through the same counting wrapper
/// * `max_input` - ceiling every other field is validated against
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FibConfig {
    pub table_size: u64,
    pub inputs: Vec<u64>,
    pub max_input: u64,
}

impl Default for FibConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_FIB_TABLE_SIZE,
            inputs: DEFAULT_FIB_INPUTS.to_vec(),
            max_input: DEFAULT_FIB_MAX_INPUT,
        }
    }
}

/// Where decorator notifications go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    Stdout,
    Tracing,
    Silent,
}

impl OutputMode {
    pub fn sink(self) -> Arc<dyn NotificationSink> {
        match self {
            OutputMode::Stdout => Arc::new(StdoutSink),
            OutputMode::Tracing => Arc::new(TracingSink),
            OutputMode::Silent => Arc::new(SilentSink),
        }
    }
}

/// The walkthrough's sections, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Counting,
    Composition,
    Metadata,
    Logging,
    Exceptions,
    Arguments,
    Timing,
}

impl Section {
    pub const fn all() -> &'static [Section] {
        &[
            Section::Counting,
            Section::Composition,
            Section::Metadata,
            Section::Logging,
            Section::Exceptions,
            Section::Arguments,
            Section::Timing,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Counting => "counting",
            Section::Composition => "composition",
            Section::Metadata => "metadata",
            Section::Logging => "logging",
            Section::Exceptions => "exceptions",
            Section::Arguments => "arguments",
            Section::Timing => "timing",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Counting => "Counting calls of a function",
            Section::Composition => "Composing decorators",
            Section::Metadata => "Loss of docstrings and what to do about it",
            Section::Logging => "A simple logging decorator",
            Section::Exceptions => "Detecting exceptions",
            Section::Arguments => "Decorators with arguments",
            Section::Timing => "Timing a function",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::all()
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSection {
                name: s.to_string(),
                expected: Section::all()
                    .iter()
                    .map(|section| section.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<WalkthroughConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty document deserializes as YAML null, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(WalkthroughConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
) -> Result<WalkthroughConfig, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let yaml = r#"
output: silent
sections: [counting, exceptions]
fib:
  inputs: [5]
"#;

        let cfg: WalkthroughConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.output, OutputMode::Silent);
        assert_eq!(cfg.sections, vec![Section::Counting, Section::Exceptions]);
        assert_eq!(cfg.fib.inputs, vec![5]);
        assert_eq!(cfg.fib.table_size, DEFAULT_FIB_TABLE_SIZE);
        assert_eq!(cfg.greeting, "Alice");
        assert_eq!(cfg.decorator_arguments, vec!["Hallo", "World"]);
    }

    #[test]
    fn parse_integer_divisions_as_floats() {
        let cfg: WalkthroughConfig = serde_yaml::from_str("divisions: [[9, 3], [1, 0]]").unwrap();
        assert_eq!(cfg.divisions, vec![[9.0, 3.0], [1.0, 0.0]]);
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let file = write_config("");
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg, WalkthroughConfig::default());
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_config(
            r#"
output: tracing
log_filter: debug
fib:
  table_size: 12
  inputs: [10, 15]
  max_input: 20
decorator_arguments: [X, Y]
"#,
        );

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.output, OutputMode::Tracing);
        assert_eq!(cfg.log_filter, "debug");
        assert_eq!(cfg.fib.max_input, 20);
        assert_eq!(cfg.sections.len(), Section::all().len());
    }

    #[test]
    fn test_load_and_validate_rejects_large_inputs() {
        let file = write_config("fib:\n  inputs: [50]\n");
        let err = load_and_validate_config(file.path()).unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(
                    errors,
                    vec![ValidationError::FibonacciInputTooLarge {
                        field: "fib.inputs",
                        input: 50,
                        max_input: DEFAULT_FIB_MAX_INPUT,
                    }]
                );
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_unknown_section_is_a_parse_error() {
        let file = write_config("sections: [counting, memoization]\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("timing".parse::<Section>().unwrap(), Section::Timing);
        let err = "memoization".parse::<Section>().unwrap_err();
        assert!(err.to_string().starts_with("unknown section 'memoization'"));
    }

    #[test]
    fn test_sections_round_trip_through_names() {
        for section in Section::all() {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), *section);
        }
    }
}
