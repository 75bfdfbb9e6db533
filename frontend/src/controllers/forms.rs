use crate::category::Category;
use crate::error::FormError;
use crate::gateway::Gateway;
use crate::models::{NewExpense, NewGoal};

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(FormError),
    Created,
    /// The gateway call failed; the form keeps its fields.
    Failed,
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(value)
    }
}

fn amount(field: &'static str, value: &str) -> Result<f64, FormError> {
    let raw = required(field, value)?;
    match raw.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(FormError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: Category,
    pub description: String,
    /// Optional `YYYY-MM-DD`; the gateway uses today when omitted.
    pub date: String,
}

impl ExpenseForm {
    pub fn validate(&self) -> Result<NewExpense, FormError> {
        let amount = amount("Amount", &self.amount)?;
        let description = required("Description", &self.description)?;
        Ok(NewExpense {
            amount,
            category: self.category,
            description: description.to_string(),
            date: optional(&self.date),
        })
    }

    pub async fn submit(&mut self, gateway: &dyn Gateway) -> SubmitOutcome {
        let expense = match self.validate() {
            Ok(expense) => expense,
            Err(err) => {
                tracing::debug!("Expense form not submitted: {}", err);
                return SubmitOutcome::Rejected(err);
            }
        };
        match gateway.create_expense(&expense).await {
            Ok(()) => {
                self.amount.clear();
                self.description.clear();
                self.date.clear();
                tracing::info!("Expense recorded under {}", expense.category);
                SubmitOutcome::Created
            }
            Err(err) => {
                tracing::error!("Error adding expense: {}", err);
                SubmitOutcome::Failed
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalForm {
    pub title: String,
    pub target_amount: String,
    pub deadline: String,
}

impl GoalForm {
    pub fn validate(&self) -> Result<NewGoal, FormError> {
        let title = required("Goal title", &self.title)?;
        let target_amount = amount("Target amount", &self.target_amount)?;
        Ok(NewGoal {
            title: title.to_string(),
            target_amount,
            deadline: optional(&self.deadline),
        })
    }

    pub async fn submit(&mut self, gateway: &dyn Gateway) -> SubmitOutcome {
        let goal = match self.validate() {
            Ok(goal) => goal,
            Err(err) => {
                tracing::debug!("Goal form not submitted: {}", err);
                return SubmitOutcome::Rejected(err);
            }
        };
        match gateway.create_goal(&goal).await {
            Ok(()) => {
                *self = GoalForm::default();
                SubmitOutcome::Created
            }
            Err(err) => {
                tracing::error!("Error adding goal: {}", err);
                SubmitOutcome::Failed
            }
        }
    }
}
