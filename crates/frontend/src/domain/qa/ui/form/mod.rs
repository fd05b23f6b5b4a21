pub mod view_model;

use contracts::catalog;
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::view_model::QaFormViewModel;
use crate::domain::qa::api::HttpStore;
use crate::layout::AppGlobalContext;
use crate::shared::components::modal::ConfirmDialog;
use crate::shared::components::ui::{Input, Select, Textarea};

/// Add-record form. The store is the single source of truth: after a
/// successful create the list and the counts are re-fetched, never patched
/// locally.
#[component]
#[allow(non_snake_case)]
pub fn QaForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let vm = QaFormViewModel::new();
    let saved_open = RwSignal::new(false);

    let category_options = Signal::derive(|| {
        catalog::CATEGORIES
            .iter()
            .map(|c| c.name.to_string())
            .collect::<Vec<String>>()
    });
    let language_options = Signal::derive(move || {
        let category = vm.draft.with(|d| d.category.clone());
        catalog::languages_for(&category)
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<String>>()
    });

    let saving = vm.saving;
    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        spawn_local(async move {
            if vm.submit(&HttpStore).await.is_ok() {
                // create is sequenced strictly before the refresh so the
                // re-fetch observes the new record
                ctx.refresh_list(&HttpStore).await;
                ctx.refresh_counts(&HttpStore).await;
                saved_open.set(true);
            }
        });
    };

    view! {
        <div class="qa-form">
            <h3 class="qa-form__heading">"Add Interview Question & Answer"</h3>

            <div class="qa-form__row">
                <Select
                    label="Type"
                    id="type"
                    value=Signal::derive(move || vm.draft.with(|d| d.category.clone()))
                    options=category_options
                    on_change=Callback::new(move |c: String| vm.set_category(c))
                    disabled=saving
                />
                <Select
                    label="Programming Language"
                    id="language"
                    value=Signal::derive(move || vm.draft.with(|d| d.language.clone()))
                    options=language_options
                    on_change=Callback::new(move |l: String| vm.set_language(l))
                    disabled=saving
                />
            </div>

            <Input
                label="Question"
                id="question"
                value=Signal::derive(move || vm.draft.with(|d| d.question.clone()))
                on_input=Callback::new(move |q: String| vm.set_question(q))
                placeholder="Java 8 Features"
                disabled=saving
            />

            <Textarea
                label="Explanation"
                id="explanation"
                value=Signal::derive(move || vm.draft.with(|d| d.explanation.clone()))
                on_input=Callback::new(move |v: String| vm.set_explanation(v))
                rows=5
                disabled=saving
            />

            <Textarea
                label="Real Time Use Case"
                id="usecase"
                value=Signal::derive(move || vm.draft.with(|d| d.usecase.clone()))
                on_input=Callback::new(move |v: String| vm.set_usecase(v))
                rows=5
                disabled=saving
            />

            <Textarea
                label="Example Code"
                id="exampleCode"
                value=Signal::derive(move || vm.draft.with(|d| d.example_code.clone()))
                on_input=Callback::new(move |v: String| vm.set_example_code(v))
                rows=8
                monospace=true
                placeholder="Code"
                disabled=saving
            />

            <Textarea
                label="Output"
                id="output"
                value=Signal::derive(move || vm.draft.with(|d| d.output.clone()))
                on_input=Callback::new(move |v: String| vm.set_output(v))
                disabled=saving
            />

            <Textarea
                label="Simple Summary"
                id="summary"
                value=Signal::derive(move || vm.draft.with(|d| d.summary.clone()))
                on_input=Callback::new(move |v: String| vm.set_summary(v))
                rows=5
                disabled=saving
            />

            {move || {
                vm.error.get().map(|msg| view! {
                    <div class="qa-form__error">{msg}</div>
                })
            }}

            <button
                class="btn btn--primary"
                on:click=on_save
                disabled=move || saving.get()
            >
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>

            <ConfirmDialog
                open=saved_open
                title="Saved"
                body="Question & Answer saved successfully."
                on_close=Callback::new(move |_| saved_open.set(false))
            />
        </div>
    }
}
