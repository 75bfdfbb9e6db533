#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use smartspend::error::GatewayError;
use smartspend::gateway::Gateway;
use smartspend::models::{AnalyticsSnapshot, DashboardSnapshot, Goal, NewExpense, NewGoal};

/// Records every call and serves canned responses.
#[derive(Default)]
pub struct MockGateway {
    pub dashboard: RefCell<DashboardSnapshot>,
    pub analytics: RefCell<AnalyticsSnapshot>,
    pub goals: RefCell<Vec<Goal>>,
    pub offline: Cell<bool>,
    pub dashboard_calls: Cell<usize>,
    pub analytics_calls: Cell<usize>,
    pub goals_calls: Cell<usize>,
    pub created_expenses: RefCell<Vec<NewExpense>>,
    pub created_goals: RefCell<Vec<NewGoal>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_calls(&self) -> usize {
        self.dashboard_calls.get()
            + self.analytics_calls.get()
            + self.goals_calls.get()
            + self.created_expenses.borrow().len()
            + self.created_goals.borrow().len()
    }

    fn check_online(&self) -> Result<(), GatewayError> {
        if self.offline.get() {
            Err(GatewayError::Transport("network unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl Gateway for MockGateway {
    async fn dashboard(&self) -> Result<DashboardSnapshot, GatewayError> {
        self.dashboard_calls.set(self.dashboard_calls.get() + 1);
        self.check_online()?;
        Ok(self.dashboard.borrow().clone())
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<(), GatewayError> {
        self.created_expenses.borrow_mut().push(expense.clone());
        self.check_online()
    }

    async fn analytics(&self) -> Result<AnalyticsSnapshot, GatewayError> {
        self.analytics_calls.set(self.analytics_calls.get() + 1);
        self.check_online()?;
        Ok(self.analytics.borrow().clone())
    }

    async fn goals(&self) -> Result<Vec<Goal>, GatewayError> {
        self.goals_calls.set(self.goals_calls.get() + 1);
        self.check_online()?;
        Ok(self.goals.borrow().clone())
    }

    async fn create_goal(&self, goal: &NewGoal) -> Result<(), GatewayError> {
        self.created_goals.borrow_mut().push(goal.clone());
        self.check_online()?;
        self.goals.borrow_mut().push(Goal {
            id: format!("g{}", self.created_goals.borrow().len()),
            title: goal.title.clone(),
            target_amount: goal.target_amount,
            current_amount: 0.0,
            deadline: goal.deadline.clone(),
        });
        Ok(())
    }
}

pub fn goal(id: &str, title: &str, target_amount: f64, current_amount: f64) -> Goal {
    Goal {
        id: id.to_string(),
        title: title.to_string(),
        target_amount,
        current_amount,
        deadline: None,
    }
}
