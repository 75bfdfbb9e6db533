use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::category::style_for_label;
use crate::components::{
    category_badge, go_to, icon_pie_chart, icon_plus, icon_target, icon_trending_up,
    loading_screen, ProgressBar, StatCard, StatIcon,
};
use crate::controllers::DashboardScreen;
use crate::gateway::GatewayHandle;
use crate::metrics::format_currency;
use crate::router::{RouterAction, View};

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub gateway: GatewayHandle,
    pub navigate: Callback<RouterAction>,
    /// Changes whenever an expense write invalidates the dashboard.
    pub data_epoch: u64,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let screen = use_state(DashboardScreen::new);

    {
        let screen = screen.clone();
        let gateway = props.gateway.clone();
        use_effect_with_deps(
            move |epoch: &u64| {
                let epoch = *epoch;
                let mut next = (*screen).clone();
                spawn_local(async move {
                    next.sync(&*gateway, epoch).await;
                    screen.set(next);
                });
                || ()
            },
            props.data_epoch,
        );
    }

    if screen.is_loading() {
        return loading_screen("Loading your financial insights...");
    }

    let budget = screen.budget_status();
    let (budget_accent, budget_fill) = if budget.over_budget {
        ("text-red-600", "bg-red-500")
    } else {
        ("text-green-600", "bg-purple-500")
    };
    let categories = screen.category_totals();
    let recent = screen.recent_expenses();

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 p-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold text-gray-800 mb-2">{"SmartSpend"}</h1>
                    <p class="text-gray-600">{"Money Made Mindful"}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                    <StatCard title="Today's Spending" amount={screen.today_total()} icon={StatIcon::Calendar} />
                    <StatCard title="This Month" amount={screen.month_total()} icon={StatIcon::Wallet} />
                    <StatCard title={budget.headline()} amount={budget.remaining_budget.abs()} icon={StatIcon::Target} accent={Some(budget_accent)}>
                        <div class="mt-3">
                            <ProgressBar width={budget.bar_width()} fill={budget_fill} />
                            <p class="text-xs text-gray-500 mt-1">{ budget.caption() }</p>
                        </div>
                    </StatCard>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
                    <button onclick={go_to(&props.navigate, View::AddExpense)} class="bg-gradient-to-r from-blue-500 to-blue-600 text-white p-4 rounded-xl shadow-lg flex flex-col items-center">
                        { icon_plus() }
                        <span class="font-medium">{"Add Expense"}</span>
                    </button>
                    <button onclick={go_to(&props.navigate, View::Analytics)} class="bg-gradient-to-r from-green-500 to-green-600 text-white p-4 rounded-xl shadow-lg flex flex-col items-center">
                        { icon_trending_up() }
                        <span class="font-medium">{"Analytics"}</span>
                    </button>
                    <button onclick={go_to(&props.navigate, View::Goals)} class="bg-gradient-to-r from-purple-500 to-purple-600 text-white p-4 rounded-xl shadow-lg flex flex-col items-center">
                        { icon_target() }
                        <span class="font-medium">{"Goals"}</span>
                    </button>
                    <button class="bg-gradient-to-r from-orange-500 to-orange-600 text-white p-4 rounded-xl shadow-lg flex flex-col items-center">
                        { icon_pie_chart() }
                        <span class="font-medium">{"Insights"}</span>
                    </button>
                </div>

                { if categories.is_empty() { html! {} } else { html! {
                    <div class="bg-white rounded-xl shadow-lg p-6 mb-8">
                        <h3 class="text-xl font-bold text-gray-800 mb-4">{"Spending by Category"}</h3>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            { for categories.iter().map(|(label, amount)| html! {
                                <div key={*label} class="flex items-center p-3 bg-gray-50 rounded-lg">
                                    { category_badge(style_for_label(label)) }
                                    <div>
                                        <p class="text-sm text-gray-600">{ *label }</p>
                                        <p class="font-semibold text-gray-800">{ format_currency(*amount) }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                } } }

                { if recent.is_empty() { html! {} } else { html! {
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <h3 class="text-xl font-bold text-gray-800 mb-4">{"Recent Expenses"}</h3>
                        <div class="space-y-3">
                            { for recent.iter().map(|expense| html! {
                                <div key={expense.id.clone()} class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                                    <div class="flex items-center">
                                        { category_badge(expense.style()) }
                                        <div>
                                            <p class="font-medium text-gray-800">{ &expense.description }</p>
                                            <p class="text-sm text-gray-600">{ format!("{} • {}", expense.category, expense.date) }</p>
                                        </div>
                                    </div>
                                    <p class="font-bold text-gray-800">{ format_currency(expense.amount) }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                } } }
            </div>
        </div>
    }
}
