use yew::prelude::*;

use crate::category::{CategoryIcon, CategoryStyle};
use crate::metrics::format_currency;
use crate::router::{RouterAction, View};

pub fn page_shell(
    title: &'static str,
    on_back: Option<Callback<MouseEvent>>,
    actions: Html,
    children: Html,
) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 p-4">
            <div class="max-w-6xl mx-auto">
                <div class="flex items-center justify-between mb-6">
                    <div class="flex items-center">
                        { match on_back {
                            Some(on_back) => html! {
                                <button onclick={on_back} class="mr-4 p-2 rounded-full hover:bg-white hover:shadow-md" aria-label="Back">
                                    {"←"}
                                </button>
                            },
                            None => html! {},
                        } }
                        <h2 class="text-3xl font-bold text-gray-800">{ title }</h2>
                    </div>
                    { actions }
                </div>
                { children }
            </div>
        </div>
    }
}

pub fn loading_screen(message: &'static str) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center">
            <div class="text-xl text-gray-600">{ message }</div>
        </div>
    }
}

pub fn back_to_dashboard(navigate: &Callback<RouterAction>) -> Callback<MouseEvent> {
    let navigate = navigate.clone();
    Callback::from(move |_| navigate.emit(RouterAction::Back))
}

pub fn go_to(navigate: &Callback<RouterAction>, view: View) -> Callback<MouseEvent> {
    let navigate = navigate.clone();
    Callback::from(move |_| navigate.emit(RouterAction::Navigate(view)))
}

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Calendar,
    Wallet,
    Target,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: f64,
    pub icon: StatIcon,
    #[prop_or_default]
    pub accent: Option<&'static str>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let value_class = classes!("text-2xl", "font-bold", props.accent.unwrap_or("text-gray-800"));
    html! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-gray-500 text-sm mb-1">{ props.title }</p>
                    <p class={value_class}>{ format_currency(props.amount) }</p>
                </div>
                <div class="bg-blue-100 p-3 rounded-full">
                    {
                        match props.icon {
                            StatIcon::Calendar => icon_calendar(),
                            StatIcon::Wallet => icon_wallet(),
                            StatIcon::Target => icon_target(),
                        }
                    }
                </div>
            </div>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Already clamped to 0..=100.
    pub width: f64,
    #[prop_or("bg-blue-500")]
    pub fill: &'static str,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="bg-gray-200 rounded-full h-2">
            <div class={classes!("h-2", "rounded-full", props.fill)} style={format!("width: {}%", props.width)}></div>
        </div>
    }
}

pub fn category_badge(style: CategoryStyle) -> Html {
    html! {
        <div class="p-2 rounded-full mr-3" style={format!("background-color: {}20; color: {}", style.color, style.color)}>
            { category_icon(style.icon) }
        </div>
    }
}

pub fn category_icon(icon: CategoryIcon) -> Html {
    match icon {
        CategoryIcon::Utensils => icon_base("M3 2v7c0 1.1.9 2 2 2h4a2 2 0 002-2V2M7 2v20M21 15V2a5 5 0 00-5 5v6c0 1.1.9 2 2 2h3zm0 0v7"),
        CategoryIcon::Car => icon_base("M5 17h14M5 17a2 2 0 11-4 0 2 2 0 014 0zM19 17a2 2 0 104 0 2 2 0 00-4 0zM3 17V11l2-5h14l2 5v6"),
        CategoryIcon::ShoppingBag => icon_base("M6 2L3 6v14a2 2 0 002 2h14a2 2 0 002-2V6l-3-4zM3 6h18M16 10a4 4 0 01-8 0"),
        CategoryIcon::Gamepad => icon_base("M6 12h4M8 10v4M15 13h.01M18 11h.01M17.32 5H6.68a4 4 0 00-3.98 3.59L2 15a3 3 0 005.2 2L9 15h6l1.8 2a3 3 0 005.2-2l-.7-6.41A4 4 0 0017.32 5z"),
        CategoryIcon::Heart => icon_base("M20.8 4.6a5.5 5.5 0 00-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 00-7.8 7.8L12 21.2l8.8-8.8a5.5 5.5 0 000-7.8z"),
        CategoryIcon::FileText => icon_base("M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8zM14 2v6h6M16 13H8M16 17H8"),
        CategoryIcon::GraduationCap => icon_base("M22 10L12 5 2 10l10 5 10-5zM6 12v5c3 3 9 3 12 0v-5"),
        CategoryIcon::MoreHorizontal => icon_base("M5 12h.01M12 12h.01M19 12h.01"),
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_calendar() -> Html {
    icon_base("M3 4h18v18H3zM16 2v4M8 2v4M3 10h18")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_pie_chart() -> Html {
    icon_base("M21.21 15.89A10 10 0 118 2.83M22 12A10 10 0 0012 2v10z")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
