// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget click analytics.
//!
//! The sink may be entirely absent; every call site is guarded and no
//! return value is consulted. Failures are the sink's own problem.

use std::cell::RefCell;
use std::rc::Rc;

pub mod category {
    pub const NAVIGATION: &str = "Navigation";
    pub const CTA: &str = "CTA";
    pub const LANGUAGE: &str = "Language";
}

pub mod action {
    pub const CLICK: &str = "Click";
    pub const CHANGE: &str = "Change";
}

/// Receives category/action/label triples. Implementations must not block.
pub trait AnalyticsSink {
    fn track(&self, category: &str, action: &str, label: &str);
}

/// Writes tracked events to stderr. Stands in for a real analytics backend.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl AnalyticsSink for ConsoleSink {
    fn track(&self, category: &str, action: &str, label: &str) {
        eprintln!("Event tracked: {} - {} - {}", category, action, label);
    }
}

/// In-memory sink for tests; cloned handles share the recorded events.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<(String, String, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, String, String)> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&self, category: &str, action: &str, label: &str) {
        self.events.borrow_mut().push((
            category.to_string(),
            action.to_string(),
            label.to_string(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_shares_events_across_clones() {
        let sink = RecordingSink::new();
        let handle = sink.clone();

        sink.track(category::NAVIGATION, action::CLICK, "Home");
        assert_eq!(
            handle.events(),
            vec![(
                "Navigation".to_string(),
                "Click".to_string(),
                "Home".to_string()
            )]
        );
    }
}
