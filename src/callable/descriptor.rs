// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

/// Name and documentation carried explicitly alongside a callable.
///
/// Wrappers own their own descriptor. Copying the target's descriptor onto a
/// wrapper is an explicit step (see [`crate::decorators::Wrapper::wraps`]),
/// never something that happens implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableDescriptor {
    name: String,
    doc: Option<String>,
}

impl CallableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    /// Identity of a wrapping utility's internal helper: a bare name, no documentation.
    pub fn helper(name: &str) -> Self {
        Self::new(name)
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Overwrite name and documentation with those of `source`.
    pub fn copy_from(&mut self, source: &CallableDescriptor) {
        self.name.clone_from(&source.name);
        self.doc.clone_from(&source.doc);
    }
}

impl Display for CallableDescriptor {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
