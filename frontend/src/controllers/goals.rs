use std::rc::Rc;

use yew::functional::Reducible;

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::metrics::GoalProgress;
use crate::models::Goal;

use super::{GoalForm, Loadable, SubmitOutcome};

#[derive(Debug)]
pub enum GoalsAction {
    Loaded(Result<Vec<Goal>, GatewayError>),
    OpenForm,
    CloseForm,
    EditTitle(String),
    EditTarget(String),
    EditDeadline(String),
    SubmitStarted,
    SubmitFinished(SubmitOutcome),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalsScreen {
    goals: Loadable<Vec<Goal>>,
    pub form: GoalForm,
    form_open: bool,
    submitting: bool,
}

impl GoalsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one step to the current state. Async work reports back through
    /// these actions, so edits made while a request is in flight survive it.
    pub fn apply(&mut self, action: GoalsAction) {
        match action {
            GoalsAction::Loaded(result) => self.goals.settle(result, "goals"),
            GoalsAction::OpenForm => self.form_open = true,
            GoalsAction::CloseForm => self.form_open = false,
            GoalsAction::EditTitle(value) => self.form.title = value,
            GoalsAction::EditTarget(value) => self.form.target_amount = value,
            GoalsAction::EditDeadline(value) => self.form.deadline = value,
            GoalsAction::SubmitStarted => self.submitting = true,
            GoalsAction::SubmitFinished(outcome) => {
                self.submitting = false;
                if outcome == SubmitOutcome::Created {
                    self.form = GoalForm::default();
                    self.form_open = false;
                }
            }
        }
    }

    /// Fetches the goal list without raising the loading flag again, so a
    /// refetch after a create does not blank the screen.
    pub async fn load(&mut self, gateway: &dyn Gateway) {
        let result = gateway.goals().await;
        self.apply(GoalsAction::Loaded(result));
    }

    pub fn open_form(&mut self) {
        self.apply(GoalsAction::OpenForm);
    }

    pub fn close_form(&mut self) {
        self.apply(GoalsAction::CloseForm);
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_loading(&self) -> bool {
        self.goals.is_loading()
    }

    pub fn goals(&self) -> &[Goal] {
        self.goals.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn shows_empty_state(&self) -> bool {
        self.goals().is_empty()
    }

    pub fn progress(&self) -> Vec<(&Goal, GoalProgress)> {
        self.goals().iter().map(|g| (g, GoalProgress::of(g))).collect()
    }
}

impl Reducible for GoalsScreen {
    type Action = GoalsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Creates a goal from `form`, then refetches the list on success. An
/// incomplete form is rejected without dispatching anything.
pub async fn create_goal(
    gateway: &dyn Gateway,
    mut form: GoalForm,
    dispatch: impl Fn(GoalsAction),
) -> SubmitOutcome {
    if let Err(err) = form.validate() {
        tracing::debug!("Goal form not submitted: {}", err);
        return SubmitOutcome::Rejected(err);
    }
    dispatch(GoalsAction::SubmitStarted);
    let outcome = form.submit(gateway).await;
    let created = outcome == SubmitOutcome::Created;
    dispatch(GoalsAction::SubmitFinished(outcome.clone()));
    if created {
        dispatch(GoalsAction::Loaded(gateway.goals().await));
    }
    outcome
}
