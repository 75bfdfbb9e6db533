//! Per-screen fetch, loading and form state. Controllers are plain values: a
//! page clones one out of its state handle, runs an async step against the
//! gateway, then stores the result back. The goals screen is a reducer instead,
//! since its form stays editable while a create is in flight.

mod analytics;
mod dashboard;
mod forms;
mod goals;

pub use analytics::AnalyticsScreen;
pub use dashboard::DashboardScreen;
pub use forms::{ExpenseForm, GoalForm, SubmitOutcome};
pub use goals::{create_goal, GoalsAction, GoalsScreen};

use crate::error::GatewayError;

/// Screen-scoped data with its loading flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadable<T> {
    data: Option<T>,
    loading: bool,
}

impl<T> Loadable<T> {
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Stores a successful response. A failure is logged and leaves the
    /// previous data in place. Either way the loading flag clears.
    pub fn settle(&mut self, result: Result<T, GatewayError>, operation: &str) {
        match result {
            Ok(data) => self.data = Some(data),
            Err(err) => tracing::error!("Error fetching {}: {}", operation, err),
        }
        self.loading = false;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::pending()
    }
}
