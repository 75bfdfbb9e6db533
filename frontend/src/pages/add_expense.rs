use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::category::Category;
use crate::components::{back_to_dashboard, page_shell};
use crate::controllers::{ExpenseForm, SubmitOutcome};
use crate::router::RouterAction;

use super::{field_value, PageProps};

#[function_component(AddExpensePage)]
pub fn add_expense_page(props: &PageProps) -> Html {
    let form = use_state(ExpenseForm::default);
    let submitting = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let gateway = props.gateway.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut draft = (*form).clone();
            if let Err(err) = draft.validate() {
                tracing::debug!("Expense form not submitted: {}", err);
                return;
            }

            let form = form.clone();
            let submitting = submitting.clone();
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            submitting.set(true);
            spawn_local(async move {
                let outcome = draft.submit(&*gateway).await;
                submitting.set(false);
                if outcome == SubmitOutcome::Created {
                    form.set(draft);
                    navigate.emit(RouterAction::ExpenseRecorded);
                }
            });
        })
    };

    let on_amount = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = field_value(&e) {
                let mut next = (*form).clone();
                next.amount = value;
                form.set(next);
            }
        })
    };
    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(category) = field_value(&e).and_then(|v| Category::from_label(&v)) {
                let mut next = (*form).clone();
                next.category = category;
                form.set(next);
            }
        })
    };
    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = field_value(&e) {
                let mut next = (*form).clone();
                next.description = value;
                form.set(next);
            }
        })
    };
    let on_date = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = field_value(&e) {
                let mut next = (*form).clone();
                next.date = value;
                form.set(next);
            }
        })
    };

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    page_shell(
        "Add Expense",
        Some(back_to_dashboard(&props.navigate)),
        html! {},
        html! {
            <div class="max-w-md mx-auto bg-white rounded-xl shadow-lg p-6">
                <form onsubmit={on_submit} class="space-y-6">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Amount"}</label>
                        <input type="number" step="0.01" placeholder="0.00" required={true}
                            value={form.amount.clone()} oninput={on_amount} class={input_class} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Category"}</label>
                        <select onchange={on_category} class={input_class}>
                            { for Category::ALL.iter().map(|category| html! {
                                <option key={category.label()} value={category.label()} selected={*category == form.category}>
                                    { category.label() }
                                </option>
                            }) }
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Description"}</label>
                        <input type="text" placeholder="What did you spend on?" required={true}
                            value={form.description.clone()} oninput={on_description} class={input_class} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Date (optional)"}</label>
                        <input type="date" value={form.date.clone()} oninput={on_date} class={input_class} />
                    </div>
                    <button type="submit" disabled={*submitting}
                        class="w-full bg-gradient-to-r from-blue-500 to-blue-600 text-white py-3 rounded-lg font-medium disabled:opacity-50">
                        { if *submitting { "Adding..." } else { "Add Expense" } }
                    </button>
                </form>
            </div>
        },
    )
}
