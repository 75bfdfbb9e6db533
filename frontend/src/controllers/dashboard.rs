use crate::gateway::Gateway;
use crate::metrics::BudgetStatus;
use crate::models::{ordered_totals, DashboardSnapshot, Expense};

use super::Loadable;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardScreen {
    snapshot: Loadable<DashboardSnapshot>,
    loaded_epoch: Option<u64>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until data for `epoch` has been requested.
    pub fn is_stale(&self, epoch: u64) -> bool {
        self.loaded_epoch != Some(epoch)
    }

    /// Fetches the snapshot once per data epoch. A fresh screen always fetches.
    pub async fn sync(&mut self, gateway: &dyn Gateway, epoch: u64) {
        if !self.is_stale(epoch) {
            return;
        }
        self.snapshot.begin();
        let result = gateway.dashboard().await;
        self.snapshot.settle(result, "dashboard data");
        // Marked even on failure: a failed fetch is not retried.
        self.loaded_epoch = Some(epoch);
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_loading()
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.data()
    }

    pub fn budget_status(&self) -> BudgetStatus {
        BudgetStatus::from_snapshot(self.snapshot())
    }

    pub fn today_total(&self) -> f64 {
        self.snapshot().map_or(0.0, |s| s.total_expenses_today)
    }

    pub fn month_total(&self) -> f64 {
        self.snapshot().map_or(0.0, |s| s.total_expenses_month)
    }

    pub fn category_totals(&self) -> Vec<(&str, f64)> {
        self.snapshot()
            .map(|s| ordered_totals(&s.expenses_by_category))
            .unwrap_or_default()
    }

    pub fn recent_expenses(&self) -> &[Expense] {
        self.snapshot()
            .map(|s| s.recent_expenses.as_slice())
            .unwrap_or(&[])
    }
}
