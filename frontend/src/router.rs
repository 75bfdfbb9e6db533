use std::rc::Rc;

use yew::functional::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    AddExpense,
    Analytics,
    Goals,
}

impl View {
    pub fn slug(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::AddExpense => "add-expense",
            View::Analytics => "analytics",
            View::Goals => "goals",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterAction {
    Navigate(View),
    /// Back always lands on the dashboard; there is no history.
    Back,
    /// An expense write completed: invalidate dashboard data and show it.
    ExpenseRecorded,
}

/// Session navigation state, owned by the root component.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Router {
    view: View,
    data_epoch: u64,
}

impl Router {
    pub fn view(&self) -> View {
        self.view
    }

    /// Dashboard data version; bumped on every completed expense write.
    pub fn data_epoch(&self) -> u64 {
        self.data_epoch
    }

    pub fn apply(&self, action: RouterAction) -> Router {
        let next = match action {
            RouterAction::Navigate(view) => Router {
                view,
                data_epoch: self.data_epoch,
            },
            RouterAction::Back => Router {
                view: View::Dashboard,
                data_epoch: self.data_epoch,
            },
            RouterAction::ExpenseRecorded => Router {
                view: View::Dashboard,
                data_epoch: self.data_epoch + 1,
            },
        };
        tracing::debug!(
            "navigation {} -> {} (epoch {})",
            self.view.slug(),
            next.view.slug(),
            next.data_epoch
        );
        next
    }
}

impl Reducible for Router {
    type Action = RouterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
