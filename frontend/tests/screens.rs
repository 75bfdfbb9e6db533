mod common;

use std::cell::RefCell;

use futures::executor::block_on;

use common::{goal, MockGateway};
use smartspend::category::FALLBACK_STYLE;
use smartspend::controllers::{
    create_goal, AnalyticsScreen, DashboardScreen, GoalsAction, GoalsScreen, SubmitOutcome,
};
use smartspend::models::{
    DashboardSnapshot, Expense, MonthlySummary, TrendPoint, WeeklyComparison,
};

/// Runs a goal create against `screen` the way the goals page dispatches it.
fn submit_goal(screen: &mut GoalsScreen, gateway: &MockGateway) -> SubmitOutcome {
    let state = RefCell::new(std::mem::take(screen));
    let form = state.borrow().form.clone();
    let outcome = block_on(create_goal(gateway, form, |action| {
        state.borrow_mut().apply(action)
    }));
    *screen = state.into_inner();
    outcome
}

fn overspent_snapshot() -> DashboardSnapshot {
    let mut snapshot = DashboardSnapshot {
        total_expenses_today: 40.0,
        total_expenses_month: 1200.0,
        monthly_limit: Some(1000.0),
        remaining_budget: -200.0,
        ..DashboardSnapshot::default()
    };
    snapshot.expenses_by_category.insert("Shopping".to_string(), 800.0);
    snapshot.expenses_by_category.insert("Food".to_string(), 400.0);
    snapshot
}

#[test]
fn dashboard_shows_overspend() {
    let gateway = MockGateway::new();
    *gateway.dashboard.borrow_mut() = overspent_snapshot();

    let mut screen = DashboardScreen::new();
    assert!(screen.is_loading());
    block_on(screen.sync(&gateway, 0));
    assert!(!screen.is_loading());

    let budget = screen.budget_status();
    assert_eq!(budget.headline(), "Over Budget");
    assert_eq!(budget.amount_text(), "₹200.00");
    assert_eq!(budget.bar_width(), 100.0);
    assert_eq!(screen.today_total(), 40.0);

    let labels: Vec<&str> = screen.category_totals().into_iter().map(|(l, _)| l).collect();
    assert_eq!(labels, vec!["Food", "Shopping"]);
}

#[test]
fn dashboard_failure_keeps_previous_snapshot() {
    let gateway = MockGateway::new();
    *gateway.dashboard.borrow_mut() = overspent_snapshot();
    let mut screen = DashboardScreen::new();
    block_on(screen.sync(&gateway, 0));

    gateway.offline.set(true);
    block_on(screen.sync(&gateway, 1));

    assert!(!screen.is_loading());
    assert_eq!(screen.snapshot(), Some(&overspent_snapshot()));
    assert_eq!(gateway.dashboard_calls.get(), 2);
}

#[test]
fn dashboard_failure_on_mount_renders_defaults() {
    let gateway = MockGateway::new();
    gateway.offline.set(true);
    let mut screen = DashboardScreen::new();
    block_on(screen.sync(&gateway, 0));

    assert!(!screen.is_loading());
    assert_eq!(screen.snapshot(), None);
    assert_eq!(screen.budget_status().headline(), "Remaining Budget");
    assert!(screen.recent_expenses().is_empty());
}

#[test]
fn dashboard_lists_expense_with_unknown_category() {
    let gateway = MockGateway::new();
    gateway.dashboard.borrow_mut().recent_expenses.push(Expense {
        id: "e1".to_string(),
        amount: 25.0,
        category: "Gifts".to_string(),
        description: "Card".to_string(),
        date: "2024-03-06".to_string(),
    });
    let mut screen = DashboardScreen::new();
    block_on(screen.sync(&gateway, 0));

    let recent = screen.recent_expenses();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].style(), FALLBACK_STYLE);
}

#[test]
fn empty_goal_list_shows_empty_state() {
    let gateway = MockGateway::new();
    let mut screen = GoalsScreen::new();
    block_on(screen.load(&gateway));
    assert!(!screen.is_loading());
    assert!(screen.shows_empty_state());
}

#[test]
fn goal_cards_carry_progress() {
    let gateway = MockGateway::new();
    gateway
        .goals
        .borrow_mut()
        .push(goal("g1", "Emergency Fund", 10000.0, 2500.0));
    let mut screen = GoalsScreen::new();
    block_on(screen.load(&gateway));

    let cards = screen.progress();
    assert_eq!(cards.len(), 1);
    let (card, progress) = &cards[0];
    assert_eq!(card.title, "Emergency Fund");
    assert_eq!(progress.percent_text(), "25.0%");
    assert_eq!(progress.remaining_text(), "₹7500.00");
}

#[test]
fn creating_a_goal_closes_form_and_refetches() {
    let gateway = MockGateway::new();
    let mut screen = GoalsScreen::new();
    block_on(screen.load(&gateway));
    screen.open_form();
    screen.form.title = "Vacation".to_string();
    screen.form.target_amount = "5000".to_string();

    let outcome = submit_goal(&mut screen, &gateway);

    assert_eq!(outcome, SubmitOutcome::Created);
    assert!(!screen.is_form_open());
    assert!(screen.form.title.is_empty());
    assert_eq!(gateway.goals_calls.get(), 2);
    assert_eq!(screen.goals().len(), 1);
    assert_eq!(screen.goals()[0].title, "Vacation");
}

#[test]
fn incomplete_goal_form_sends_nothing() {
    let gateway = MockGateway::new();
    let mut screen = GoalsScreen::new();
    screen.open_form();
    screen.form.title = "Vacation".to_string();

    let outcome = submit_goal(&mut screen, &gateway);

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert!(screen.is_form_open());
    assert_eq!(gateway.total_calls(), 0);
}

#[test]
fn failed_goal_create_keeps_form_open() {
    let gateway = MockGateway::new();
    let mut screen = GoalsScreen::new();
    block_on(screen.load(&gateway));
    screen.open_form();
    screen.form.title = "Laptop".to_string();
    screen.form.target_amount = "80000".to_string();

    gateway.offline.set(true);
    let outcome = submit_goal(&mut screen, &gateway);

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(screen.is_form_open());
    assert!(!screen.is_submitting());
    assert_eq!(screen.form.title, "Laptop");
    assert_eq!(gateway.goals_calls.get(), 1);
}

#[test]
fn cancelling_while_a_goal_is_created_keeps_the_form_closed() {
    let gateway = MockGateway::new();
    let mut screen = GoalsScreen::new();
    block_on(screen.load(&gateway));
    screen.open_form();
    screen.apply(GoalsAction::EditTitle("Bike".to_string()));
    screen.apply(GoalsAction::EditTarget("15000".to_string()));

    let state = RefCell::new(screen);
    let form = state.borrow().form.clone();
    let outcome = block_on(create_goal(&gateway, form, |action| {
        let started = matches!(action, GoalsAction::SubmitStarted);
        state.borrow_mut().apply(action);
        if started {
            state.borrow_mut().close_form();
        }
    }));
    let screen = state.into_inner();

    assert_eq!(outcome, SubmitOutcome::Created);
    assert!(!screen.is_form_open());
    assert!(!screen.is_submitting());
    assert_eq!(screen.goals().len(), 1);
}

#[test]
fn analytics_exposes_summary_charts_and_weekly_change() {
    let gateway = MockGateway::new();
    {
        let mut analytics = gateway.analytics.borrow_mut();
        analytics.monthly_summary = MonthlySummary {
            total_spending: 3000.0,
            average_daily: 100.0,
            total_transactions: 42,
        };
        analytics.weekly_comparison = WeeklyComparison {
            this_week: 900.0,
            last_week: 600.0,
        };
        analytics
            .category_breakdown
            .insert("Travel".to_string(), 3000.0);
        analytics.spending_trends = (1..=9)
            .map(|d| TrendPoint {
                date: format!("2024-05-{:02}", d),
                amount: 100.0,
            })
            .collect();
    }

    let mut screen = AnalyticsScreen::new();
    block_on(screen.load(&gateway));

    assert_eq!(screen.summary().total_transactions, 42);
    assert_eq!(screen.weekly_change(), Some(50.0));
    assert_eq!(screen.category_slices().len(), 1);
    let trend = screen.trend();
    assert_eq!(trend.marks.len(), 7);
    assert_eq!(trend.marks[0].label, "May 3");
}

#[test]
fn analytics_failure_clears_loading_with_empty_charts() {
    let gateway = MockGateway::new();
    gateway.offline.set(true);
    let mut screen = AnalyticsScreen::new();
    assert!(screen.is_loading());
    block_on(screen.load(&gateway));

    assert!(!screen.is_loading());
    assert!(screen.category_slices().is_empty());
    assert!(screen.trend().is_empty());
    assert_eq!(screen.summary(), MonthlySummary::default());
}
