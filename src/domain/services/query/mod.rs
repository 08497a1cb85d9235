//! Query intent resolution for the chat assistant
//!
//! Free-text questions are classified against an ordered table of intents
//! (see [`intents`]). The first intent whose predicate matches wins, so more
//! specific intents are listed before the broad ones they overlap with
//! ("initiative target" must land on an initiative intent, not on targets).
//!
//! Resolution is pure: handlers only read the [`QuerySnapshot`] they are
//! handed and project it into a [`QueryAnswer`]. A handler that fails is
//! replaced by the fallback answer, as is text that matches nothing.

mod intents;

use serde::Serialize;

use crate::domain::entities::{EntityStore, Factor, Initiative, Measurement, Supplier, Target, Track};
use crate::domain::value_objects::{ChartPoint, ChartType};

pub use intents::{IntentError, IntentKind, INTENT_ORDER};

/// Read-only view of the collections a question may touch
#[derive(Debug, Clone, Copy)]
pub struct QuerySnapshot<'a> {
    pub tracks: &'a [Track],
    pub factors: &'a [Factor],
    pub measurements: &'a [Measurement],
    pub targets: &'a [Target],
    pub initiatives: &'a [Initiative],
    pub suppliers: &'a [Supplier],
}

impl<'a> QuerySnapshot<'a> {
    /// Borrow every collection the resolver reads from the store
    pub fn from_store(store: &'a EntityStore) -> Self {
        Self {
            tracks: store.tracks(),
            factors: store.factors(),
            measurements: store.measurements(),
            targets: store.targets(),
            initiatives: store.initiatives(),
            suppliers: store.suppliers(),
        }
    }
}

/// Structured reply rendered by the chat surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryAnswer {
    pub intent: IntentKind,
    pub summary: String,
    /// `None` when there is nothing to chart
    pub chart_type: Option<ChartType>,
    pub chart_data: Vec<ChartPoint>,
    pub link_text: String,
    pub link_url: String,
}

impl QueryAnswer {
    pub fn is_fallback(&self) -> bool {
        self.intent == IntentKind::Fallback
    }
}

/// Tunables for the resolver
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverOptions {
    /// Maximum number of bars in ranked charts
    pub top_n: usize,
    /// Where the fallback answer sends the user
    pub dashboard_url: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            top_n: 5,
            dashboard_url: "/dashboard".to_string(),
        }
    }
}

/// Ordered intent matcher
#[derive(Debug, Clone, Default)]
pub struct QueryResolver {
    options: ResolverOptions,
}

impl QueryResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Classify `text` and answer it from `snapshot`
    pub fn resolve(&self, text: &str, snapshot: &QuerySnapshot<'_>) -> QueryAnswer {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return self.fallback();
        }

        match intents::classify(&normalized) {
            Some(rule) => (rule.handle)(snapshot, &self.options).unwrap_or_else(|_| self.fallback()),
            None => self.fallback(),
        }
    }

    /// Which intent `text` would be routed to
    pub fn classify(&self, text: &str) -> IntentKind {
        intents::classify(&text.trim().to_lowercase())
            .map(|rule| rule.kind)
            .unwrap_or(IntentKind::Fallback)
    }

    /// The "I don't understand" answer
    pub fn fallback(&self) -> QueryAnswer {
        QueryAnswer {
            intent: IntentKind::Fallback,
            summary: "I don't understand that question yet. Try asking about total emissions, \
                      top suppliers, target progress or initiative spend."
                .to_string(),
            chart_type: None,
            chart_data: Vec::new(),
            link_text: "Back to dashboard".to_string(),
            link_url: self.options.dashboard_url.clone(),
        }
    }
}

/// Resolve with default options
pub fn resolve_query(text: &str, snapshot: &QuerySnapshot<'_>) -> QueryAnswer {
    QueryResolver::default().resolve(text, snapshot)
}
