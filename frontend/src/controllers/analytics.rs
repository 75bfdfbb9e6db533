use crate::chart::{doughnut_slices, DoughnutSlice, TrendChart};
use crate::config::TREND_WINDOW;
use crate::gateway::Gateway;
use crate::metrics::week_over_week_change;
use crate::models::{AnalyticsSnapshot, MonthlySummary, WeeklyComparison};

use super::Loadable;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalyticsScreen {
    snapshot: Loadable<AnalyticsSnapshot>,
}

impl AnalyticsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, gateway: &dyn Gateway) {
        let result = gateway.analytics().await;
        self.snapshot.settle(result, "analytics");
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_loading()
    }

    pub fn snapshot(&self) -> Option<&AnalyticsSnapshot> {
        self.snapshot.data()
    }

    pub fn summary(&self) -> MonthlySummary {
        self.snapshot()
            .map(|s| s.monthly_summary.clone())
            .unwrap_or_default()
    }

    pub fn weekly(&self) -> WeeklyComparison {
        self.snapshot()
            .map(|s| s.weekly_comparison.clone())
            .unwrap_or_default()
    }

    pub fn weekly_change(&self) -> Option<f64> {
        week_over_week_change(&self.weekly())
    }

    pub fn category_slices(&self) -> Vec<DoughnutSlice> {
        self.snapshot()
            .map(|s| doughnut_slices(&s.category_breakdown))
            .unwrap_or_default()
    }

    pub fn trend(&self) -> TrendChart {
        let points = self
            .snapshot()
            .map(|s| s.spending_trends.as_slice())
            .unwrap_or(&[]);
        TrendChart::from_points(points, TREND_WINDOW)
    }
}
