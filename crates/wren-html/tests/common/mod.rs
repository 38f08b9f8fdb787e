//! Plugins shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use wren_html::{Hook, Plugin, Warning, WarningKind};

/// Records every warning broadcast during a run.
#[derive(Clone, Default)]
pub struct WarningLog {
    warnings: Rc<RefCell<Vec<Warning>>>,
}

impl WarningLog {
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<WarningKind> {
        self.warnings.borrow().iter().map(|w| w.kind).collect()
    }
}

impl Plugin for WarningLog {
    fn supports(&self, hook: &Hook) -> bool {
        *hook == Hook::WARN
    }

    fn warn(&mut self, warning: &Warning) {
        self.warnings.borrow_mut().push(warning.clone());
    }
}

/// Records the hooks a plugin was called on, tagged with a label.
#[derive(Clone)]
pub struct CallLog {
    label: &'static str,
    hooks: Vec<Hook>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl CallLog {
    pub fn new(label: &'static str, hooks: &[Hook], calls: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            label,
            hooks: hooks.to_vec(),
            calls: Rc::clone(calls),
        }
    }
}

impl Plugin for CallLog {
    fn supports(&self, hook: &Hook) -> bool {
        self.hooks.contains(hook)
    }

    fn start(&mut self, _source: &str) {
        self.calls.borrow_mut().push(format!("{}:start", self.label));
    }

    fn end(&mut self) {
        self.calls.borrow_mut().push(format!("{}:end", self.label));
    }

    fn warn(&mut self, warning: &Warning) {
        self.calls
            .borrow_mut()
            .push(format!("{}:warn:{}", self.label, warning.kind));
    }

    fn on_token(&mut self, cycle: &mut wren_html::Dispatch<'_>) {
        self.calls
            .borrow_mut()
            .push(format!("{}:{}", self.label, cycle.hook()));
    }
}
