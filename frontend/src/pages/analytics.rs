use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::chart::{
    circumference, DoughnutSlice, TrendChart, DOUGHNUT_RADIUS, DOUGHNUT_STROKE, TREND_HEIGHT,
    TREND_WIDTH,
};
use crate::components::{back_to_dashboard, loading_screen, page_shell};
use crate::controllers::AnalyticsScreen;
use crate::metrics::{format_currency, format_percent};

use super::PageProps;

#[function_component(AnalyticsPage)]
pub fn analytics_page(props: &PageProps) -> Html {
    let screen = use_state(AnalyticsScreen::new);

    {
        let screen = screen.clone();
        let gateway = props.gateway.clone();
        use_effect_with_deps(
            move |_| {
                let mut next = (*screen).clone();
                spawn_local(async move {
                    next.load(&*gateway).await;
                    screen.set(next);
                });
                || ()
            },
            (),
        );
    }

    if screen.is_loading() {
        return loading_screen("Loading analytics...");
    }

    let summary = screen.summary();
    let weekly = screen.weekly();
    let weekly_change = match screen.weekly_change() {
        Some(change) if change > 0.0 => format!("+{} vs last week", format_percent(change)),
        Some(change) => format!("{} vs last week", format_percent(change)),
        None => "No spending last week".to_string(),
    };

    page_shell(
        "Analytics",
        Some(back_to_dashboard(&props.navigate)),
        html! {},
        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6 mb-8">
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <h3 class="text-lg font-semibold text-gray-700 mb-2">{"Total Spending"}</h3>
                        <p class="text-3xl font-bold text-blue-600">{ format_currency(summary.total_spending) }</p>
                        <p class="text-sm text-gray-500">{"Last 30 days"}</p>
                    </div>
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <h3 class="text-lg font-semibold text-gray-700 mb-2">{"Daily Average"}</h3>
                        <p class="text-3xl font-bold text-green-600">{ format_currency(summary.average_daily) }</p>
                        <p class="text-sm text-gray-500">{"Per day"}</p>
                    </div>
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <h3 class="text-lg font-semibold text-gray-700 mb-2">{"Transactions"}</h3>
                        <p class="text-3xl font-bold text-purple-600">{ summary.total_transactions.to_string() }</p>
                        <p class="text-sm text-gray-500">{"This month"}</p>
                    </div>
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <h3 class="text-lg font-semibold text-gray-700 mb-2">{"This Week"}</h3>
                        <p class="text-3xl font-bold text-orange-600">{ format_currency(weekly.this_week) }</p>
                        <p class="text-sm text-gray-500">{ format!("Last week {}", format_currency(weekly.last_week)) }</p>
                        <p class="text-xs text-gray-400">{ weekly_change }</p>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <h3 class="text-xl font-bold text-gray-800 mb-4">{"Spending by Category"}</h3>
                        { doughnut(&screen.category_slices()) }
                    </div>
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <h3 class="text-xl font-bold text-gray-800 mb-4">{"Spending Trends"}</h3>
                        { trend_line(&screen.trend()) }
                    </div>
                </div>
            </>
        },
    )
}

fn no_data() -> Html {
    html! {
        <div class="h-64 flex items-center justify-center text-gray-500">{"No data available"}</div>
    }
}

fn doughnut(slices: &[DoughnutSlice]) -> Html {
    if slices.is_empty() {
        return no_data();
    }
    let full = circumference();
    let size = 2.0 * (DOUGHNUT_RADIUS + DOUGHNUT_STROKE);
    let center = size / 2.0;
    html! {
        <div class="h-64 flex flex-col items-center">
            <svg width="200" height="200" viewBox={format!("0 0 {size} {size}")}>
                <g transform={format!("rotate(-90 {center} {center})")}>
                    { for slices.iter().map(|slice| html! {
                        <circle cx={center.to_string()} cy={center.to_string()} r={DOUGHNUT_RADIUS.to_string()}
                            fill="none" stroke={slice.color} stroke-width={DOUGHNUT_STROKE.to_string()}
                            stroke-dasharray={format!("{:.2} {:.2}", slice.dash, full - slice.dash)}
                            stroke-dashoffset={format!("{:.2}", -slice.offset)}>
                            <title>{ format!("{}: {}", slice.label, format_currency(slice.amount)) }</title>
                        </circle>
                    }) }
                </g>
            </svg>
            <div class="flex flex-wrap justify-center gap-3 mt-2 text-xs text-gray-600">
                { for slices.iter().map(|slice| html! {
                    <span key={slice.label.clone()} class="flex items-center gap-1">
                        <span class="inline-block w-3 h-3 rounded-full" style={format!("background-color: {}", slice.color)}></span>
                        { format!("{} ({})", slice.label, format_percent(slice.share * 100.0)) }
                    </span>
                }) }
            </div>
        </div>
    }
}

fn trend_line(chart: &TrendChart) -> Html {
    if chart.is_empty() {
        return no_data();
    }
    html! {
        <div class="h-64">
            <svg class="w-full h-56" viewBox={format!("-10 -10 {} {}", TREND_WIDTH + 20.0, TREND_HEIGHT + 20.0)} preserveAspectRatio="none">
                <line x1="0" y1={TREND_HEIGHT.to_string()} x2={TREND_WIDTH.to_string()} y2={TREND_HEIGHT.to_string()} stroke="#E5E7EB" />
                <polyline points={chart.polyline()} fill="none" stroke="#3B82F6" stroke-width="3" />
                { for chart.marks.iter().map(|mark| html! {
                    <circle cx={format!("{:.1}", mark.x)} cy={format!("{:.1}", mark.y)} r="4" fill="#3B82F6">
                        <title>{ format!("{}: {}", mark.label, format_currency(mark.amount)) }</title>
                    </circle>
                }) }
            </svg>
            <div class="flex justify-between text-xs text-gray-500 mt-1">
                { for chart.marks.iter().map(|mark| html! { <span>{ mark.label.clone() }</span> }) }
            </div>
        </div>
    }
}
