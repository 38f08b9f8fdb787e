use wren_common::warning::warn_once;

use crate::error::Warning;
use crate::tokenizer::{Hook, Plugin};

/// Forwards every warning to the terminal through
/// [`warn_once`], so a repeated problem is printed once.
#[derive(Debug, Clone)]
pub struct ConsoleWarnings {
    component: String,
}

impl ConsoleWarnings {
    /// Label printed warnings with `component`, e.g. the input file name.
    #[must_use]
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }
}

impl Default for ConsoleWarnings {
    fn default() -> Self {
        Self::new("HTML")
    }
}

impl Plugin for ConsoleWarnings {
    fn supports(&self, hook: &Hook) -> bool {
        *hook == Hook::WARN
    }

    fn warn(&mut self, warning: &Warning) {
        warn_once(&self.component, &warning.to_string());
    }
}
