//! Display math over numbers already fetched from the gateway. Absent inputs
//! count as zero; nothing here can fail.

use crate::config::CURRENCY_SYMBOL;
use crate::models::{DashboardSnapshot, Goal, WeeklyComparison};

/// Month spend as a share of the monthly limit. A missing or non-positive
/// limit gives 0.
pub fn budget_percentage(month_spend: f64, monthly_limit: Option<f64>) -> f64 {
    match monthly_limit {
        Some(limit) if limit > 0.0 => month_spend / limit * 100.0,
        _ => 0.0,
    }
}

pub fn is_over_budget(budget_percentage: f64) -> bool {
    budget_percentage > 100.0
}

pub fn goal_progress(current_amount: f64, target_amount: f64) -> f64 {
    if target_amount > 0.0 {
        current_amount / target_amount * 100.0
    } else {
        0.0
    }
}

/// May be negative once a goal is exceeded.
pub fn remaining_goal_amount(target_amount: f64, current_amount: f64) -> f64 {
    target_amount - current_amount
}

/// Width of a progress bar in percent.
pub fn bar_width(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Week-over-week change in percent; `None` when there is no previous week to compare.
pub fn week_over_week_change(comparison: &WeeklyComparison) -> Option<f64> {
    if comparison.last_week > 0.0 {
        Some((comparison.this_week - comparison.last_week) / comparison.last_week * 100.0)
    } else {
        None
    }
}

pub fn format_currency(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

pub fn format_percent(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetStatus {
    pub percentage: f64,
    pub over_budget: bool,
    pub remaining_budget: f64,
}

impl BudgetStatus {
    pub fn from_snapshot(snapshot: Option<&DashboardSnapshot>) -> Self {
        let (percentage, remaining_budget) = snapshot
            .map(|s| {
                (
                    budget_percentage(s.total_expenses_month, s.monthly_limit),
                    s.remaining_budget,
                )
            })
            .unwrap_or((0.0, 0.0));
        Self {
            percentage,
            over_budget: is_over_budget(percentage),
            remaining_budget,
        }
    }

    pub fn headline(&self) -> &'static str {
        if self.over_budget {
            "Over Budget"
        } else {
            "Remaining Budget"
        }
    }

    /// The card shows the magnitude; the headline carries the sign.
    pub fn amount_text(&self) -> String {
        format_currency(self.remaining_budget.abs())
    }

    pub fn bar_width(&self) -> f64 {
        bar_width(self.percentage)
    }

    pub fn caption(&self) -> String {
        format!("{:.1}% of monthly limit", self.percentage)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalProgress {
    pub percentage: f64,
    pub remaining: f64,
}

impl GoalProgress {
    pub fn of(goal: &Goal) -> Self {
        Self {
            percentage: goal_progress(goal.current_amount, goal.target_amount),
            remaining: remaining_goal_amount(goal.target_amount, goal.current_amount),
        }
    }

    pub fn percent_text(&self) -> String {
        format_percent(self.percentage)
    }

    pub fn remaining_text(&self) -> String {
        format_currency(self.remaining)
    }

    pub fn bar_width(&self) -> f64 {
        bar_width(self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target_amount: f64, current_amount: f64) -> Goal {
        Goal {
            id: "g1".to_string(),
            title: "Emergency Fund".to_string(),
            target_amount,
            current_amount,
            deadline: None,
        }
    }

    #[test]
    fn budget_percentage_is_share_of_limit() {
        for (spend, limit) in [(0.0, 1000.0), (250.0, 1000.0), (1000.0, 1000.0), (3750.0, 5000.0)] {
            let pct = budget_percentage(spend, Some(limit));
            assert!((pct - 100.0 * spend / limit).abs() < 1e-9);
            assert!(!is_over_budget(pct));
        }
        assert!(is_over_budget(budget_percentage(1000.01, Some(1000.0))));
    }

    #[test]
    fn missing_or_zero_limit_gives_zero() {
        assert_eq!(budget_percentage(500.0, None), 0.0);
        assert_eq!(budget_percentage(500.0, Some(0.0)), 0.0);
    }

    #[test]
    fn overspent_dashboard_card() {
        let snapshot = DashboardSnapshot {
            total_expenses_month: 1200.0,
            monthly_limit: Some(1000.0),
            remaining_budget: -200.0,
            ..DashboardSnapshot::default()
        };
        let status = BudgetStatus::from_snapshot(Some(&snapshot));
        assert!(status.over_budget);
        assert_eq!(status.headline(), "Over Budget");
        assert_eq!(status.amount_text(), "₹200.00");
        assert_eq!(status.bar_width(), 100.0);
        assert_eq!(status.caption(), "120.0% of monthly limit");
    }

    #[test]
    fn empty_dashboard_card() {
        let status = BudgetStatus::from_snapshot(None);
        assert_eq!(status.headline(), "Remaining Budget");
        assert_eq!(status.amount_text(), "₹0.00");
        assert_eq!(status.bar_width(), 0.0);
    }

    #[test]
    fn quarter_funded_goal() {
        let progress = GoalProgress::of(&goal(10000.0, 2500.0));
        assert_eq!(progress.percent_text(), "25.0%");
        assert_eq!(progress.remaining_text(), "₹7500.00");
        assert_eq!(progress.bar_width(), 25.0);
    }

    #[test]
    fn exceeded_goal_clamps_bar_only() {
        let progress = GoalProgress::of(&goal(1000.0, 1500.0));
        assert_eq!(progress.percent_text(), "150.0%");
        assert_eq!(progress.bar_width(), 100.0);
        assert_eq!(progress.remaining, -500.0);
        assert_eq!(progress.remaining_text(), "₹-500.00");
    }

    #[test]
    fn week_over_week() {
        let up = WeeklyComparison {
            this_week: 150.0,
            last_week: 100.0,
        };
        assert_eq!(week_over_week_change(&up), Some(50.0));
        let fresh = WeeklyComparison {
            this_week: 80.0,
            last_week: 0.0,
        };
        assert_eq!(week_over_week_change(&fresh), None);
    }

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(12.346), "₹12.35");
        assert_eq!(format_currency(7500.0), "₹7500.00");
    }
}
