use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{style_for_label, Category, CategoryStyle};

/// Amount per category label, as keyed by the gateway.
pub type CategoryTotals = BTreeMap<String, f64>;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    /// Raw label; the gateway may send categories outside the fixed eight.
    pub category: String,
    pub description: String,
    pub date: String,
}

impl Expense {
    pub fn style(&self) -> CategoryStyle {
        style_for_label(&self.category)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub deadline: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub total_expenses_today: f64,
    pub total_expenses_month: f64,
    pub monthly_limit: Option<f64>,
    pub remaining_budget: f64,
    pub expenses_by_category: CategoryTotals,
    pub recent_expenses: Vec<Expense>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonthlySummary {
    pub total_spending: f64,
    pub average_daily: f64,
    pub total_transactions: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeeklyComparison {
    pub this_week: f64,
    pub last_week: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsSnapshot {
    pub category_breakdown: CategoryTotals,
    pub spending_trends: Vec<TrendPoint>,
    pub monthly_summary: MonthlySummary,
    pub weekly_comparison: WeeklyComparison,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: Category,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewGoal {
    pub title: String,
    pub target_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// Category totals in the fixed category order, unknown labels last.
pub fn ordered_totals(totals: &CategoryTotals) -> Vec<(&str, f64)> {
    let mut entries: Vec<(&str, f64)> = totals.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by_key(|(label, _)| {
        Category::from_label(label).map_or(Category::ALL.len(), |c| c as usize)
    });
    entries
}
