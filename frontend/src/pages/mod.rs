mod add_expense;
mod analytics;
mod dashboard;
mod goals;

pub use add_expense::AddExpensePage;
pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use goals::GoalsPage;

use yew::prelude::*;

use crate::gateway::GatewayHandle;
use crate::router::RouterAction;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub gateway: GatewayHandle,
    pub navigate: Callback<RouterAction>,
}

/// Current value of the input or select that fired `event`.
fn field_value(event: &Event) -> Option<String> {
    if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    event
        .target_dyn_into::<web_sys::HtmlSelectElement>()
        .map(|select| select.value())
}
