use yew::prelude::*;

use crate::config::ApiConfig;
use crate::gateway::GatewayHandle;
use crate::pages::{AddExpensePage, AnalyticsPage, DashboardPage, GoalsPage};
use crate::router::{Router, RouterAction, View};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    /// Overrides the HTTP gateway built from the build-time backend URL.
    #[prop_or_default]
    pub gateway: Option<GatewayHandle>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let gateway = {
        let injected = props.gateway.clone();
        use_state(move || {
            injected.unwrap_or_else(|| GatewayHandle::http(ApiConfig::from_build_env()))
        })
    };
    let router = use_reducer(Router::default);

    let navigate = {
        let router = router.clone();
        Callback::from(move |action: RouterAction| router.dispatch(action))
    };

    let gateway = (*gateway).clone();
    let content = match router.view() {
        View::Dashboard => html! {
            <DashboardPage gateway={gateway} navigate={navigate} data_epoch={router.data_epoch()} />
        },
        View::AddExpense => html! { <AddExpensePage gateway={gateway} navigate={navigate} /> },
        View::Analytics => html! { <AnalyticsPage gateway={gateway} navigate={navigate} /> },
        View::Goals => html! { <GoalsPage gateway={gateway} navigate={navigate} /> },
    };

    html! {
        <div class="App">{ content }</div>
    }
}
