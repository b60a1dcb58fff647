// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and walkthrough progress.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration file loaded and validated.
///
/// # Log Level
/// `info!`
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub section_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded configuration '{}': {} sections",
            self.path, self.section_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, section_count = self.section_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("config", span_name = name, path = self.path)
    }
}

/// Configuration failed to validate.
///
/// # Log Level
/// `error!`
pub struct ConfigInvalid<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConfigInvalid<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Configuration '{}' rejected: {}", self.path, self.error)
    }
}

impl StructuredLog for ConfigInvalid<'_> {
    fn log(&self) {
        tracing::error!(path = self.path, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("config", span_name = name, path = self.path)
    }
}

/// A walkthrough section begins.
///
/// # Log Level
/// `info!`
pub struct SectionStarted<'a> {
    pub section: &'a str,
    pub index: usize,
    pub total: usize,
}

impl Display for SectionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running section '{}' ({}/{})",
            self.section, self.index, self.total
        )
    }
}

impl StructuredLog for SectionStarted<'_> {
    fn log(&self) {
        tracing::info!(section = self.section, index = self.index, total = self.total, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("section", span_name = name, section = self.section)
    }
}
