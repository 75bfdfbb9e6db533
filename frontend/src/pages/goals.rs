use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{
    back_to_dashboard, icon_plus, icon_target, loading_screen, page_shell, ProgressBar,
};
use crate::controllers::{create_goal, GoalsAction, GoalsScreen};
use crate::metrics::format_currency;

use super::{field_value, PageProps};

#[function_component(GoalsPage)]
pub fn goals_page(props: &PageProps) -> Html {
    let screen = use_reducer(GoalsScreen::new);

    {
        let dispatcher = screen.dispatcher();
        let gateway = props.gateway.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    dispatcher.dispatch(GoalsAction::Loaded(gateway.goals().await));
                });
                || ()
            },
            (),
        );
    }

    let on_open = {
        let dispatcher = screen.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GoalsAction::OpenForm))
    };

    let on_cancel = {
        let dispatcher = screen.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GoalsAction::CloseForm))
    };

    let on_submit = {
        let dispatcher = screen.dispatcher();
        let form = screen.form.clone();
        let gateway = props.gateway.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let dispatcher = dispatcher.clone();
            let form = form.clone();
            let gateway = gateway.clone();
            spawn_local(async move {
                create_goal(&*gateway, form, |action| dispatcher.dispatch(action)).await;
            });
        })
    };

    let edit_form = |action: fn(String) -> GoalsAction| {
        let dispatcher = screen.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = field_value(&e) {
                dispatcher.dispatch(action(value));
            }
        })
    };
    let on_title = edit_form(GoalsAction::EditTitle);
    let on_target = edit_form(GoalsAction::EditTarget);
    let on_deadline = edit_form(GoalsAction::EditDeadline);

    if screen.is_loading() {
        return loading_screen("Loading goals...");
    }

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    let add_form = if screen.is_form_open() {
        html! {
            <div class="bg-white rounded-xl shadow-lg p-6 mb-6">
                <h3 class="text-xl font-bold text-gray-800 mb-4">{"Create New Goal"}</h3>
                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Goal Title"}</label>
                        <input type="text" placeholder="e.g., Emergency Fund, Vacation" required={true}
                            value={screen.form.title.clone()} oninput={on_title} class={input_class} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Target Amount"}</label>
                        <input type="number" step="0.01" placeholder="10000" required={true}
                            value={screen.form.target_amount.clone()} oninput={on_target} class={input_class} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Deadline (optional)"}</label>
                        <input type="date" value={screen.form.deadline.clone()} oninput={on_deadline} class={input_class} />
                    </div>
                    <div class="flex space-x-4">
                        <button type="submit" disabled={screen.is_submitting()}
                            class="flex-1 bg-gradient-to-r from-blue-500 to-blue-600 text-white py-3 rounded-lg font-medium disabled:opacity-50">
                            { if screen.is_submitting() { "Creating..." } else { "Create Goal" } }
                        </button>
                        <button type="button" onclick={on_cancel} class="flex-1 bg-gray-200 text-gray-700 py-3 rounded-lg font-medium">
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        }
    } else {
        html! {}
    };

    let list = if screen.shows_empty_state() {
        html! {
            <div class="bg-white rounded-xl shadow-lg p-12 text-center">
                <div class="flex justify-center text-gray-300 mb-4">{ icon_target() }</div>
                <h3 class="text-xl font-semibold text-gray-700 mb-2">{"No Goals Yet"}</h3>
                <p class="text-gray-500 mb-6">{"Start by creating your first savings goal!"}</p>
                <button onclick={on_open.clone()} class="bg-gradient-to-r from-blue-500 to-blue-600 text-white px-6 py-3 rounded-lg font-medium">
                    {"Create Your First Goal"}
                </button>
            </div>
        }
    } else {
        html! {
            <div class="space-y-6">
                { for screen.progress().into_iter().map(|(goal, progress)| html! {
                    <div key={goal.id.clone()} class="bg-white rounded-xl shadow-lg p-6">
                        <div class="flex justify-between items-start mb-4">
                            <div>
                                <h3 class="text-xl font-bold text-gray-800">{ &goal.title }</h3>
                                <p class="text-gray-600">{ format!("{} of {}", format_currency(goal.current_amount), format_currency(goal.target_amount)) }</p>
                            </div>
                            <div class="text-right">
                                <p class="text-2xl font-bold text-blue-600">{ progress.percent_text() }</p>
                                <p class="text-sm text-gray-500">{"Complete"}</p>
                            </div>
                        </div>
                        <div class="mb-4">
                            <ProgressBar width={progress.bar_width()} />
                        </div>
                        <div class="flex justify-between text-sm text-gray-600">
                            <span>{ format!("Remaining: {}", progress.remaining_text()) }</span>
                            { match &goal.deadline {
                                Some(deadline) => html! { <span>{ format!("Due: {}", deadline) }</span> },
                                None => html! {},
                            } }
                        </div>
                    </div>
                }) }
            </div>
        }
    };

    page_shell(
        "Savings Goals",
        Some(back_to_dashboard(&props.navigate)),
        html! {
            <button onclick={on_open} class="bg-gradient-to-r from-blue-500 to-blue-600 text-white px-4 py-2 rounded-lg flex items-center">
                { icon_plus() }
                <span class="ml-2">{"Add Goal"}</span>
            </button>
        },
        html! {
            <>
                { add_form }
                { list }
            </>
        },
    )
}
