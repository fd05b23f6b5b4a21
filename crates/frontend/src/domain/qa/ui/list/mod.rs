pub mod state;

use leptos::prelude::*;

use self::state::derive_page;
use crate::layout::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Input;
use crate::shared::text::sanitize_markup;

/// Accordion list of the derived page, with search and pagination.
#[component]
#[allow(non_snake_case)]
pub fn QaList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    // a dashboard card click lands here: bring the list into view
    let list_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        if ctx.scroll_to_list.get() && ctx.take_scroll_request() {
            if let Some(el) = list_ref.get_untracked() {
                el.scroll_into_view();
            }
        }
    });

    let page = Memo::new(move |_| {
        ctx.items
            .with(|items| ctx.query.with(|q| derive_page(items, q)))
    });

    let heading = move || {
        ctx.query
            .with(|q| q.selected_category.clone())
            .unwrap_or_else(|| "Saved Questions".to_string())
    };

    let on_page_change = Callback::new(move |p: usize| {
        let total = page.get_untracked().total_pages;
        ctx.query.update(|q| q.set_page(p, total));
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        ctx.query.update(|q| q.set_page_size(size));
    });

    view! {
        <div class="qa-list" node_ref=list_ref>
            <div class="qa-list__toolbar">
                <h3 class="qa-list__heading">{heading}</h3>
                <Show when=move || ctx.query.with(|q| q.selected_category.is_some())>
                    <button
                        class="btn btn--small"
                        on:click=move |_| ctx.query.update(|q| q.set_category(None))
                    >
                        "Clear filter"
                    </button>
                </Show>
                <Input
                    value=Signal::derive(move || ctx.query.with(|q| q.search.clone()))
                    on_input=Callback::new(move |term: String| {
                        ctx.query.update(|q| q.set_search(term));
                    })
                    placeholder="Search questions, use case, explanation, code..."
                />
            </div>

            <Show
                when=move || !ctx.loading_items.get()
                fallback=|| view! { <div class="qa-list__loading">"Loading..."</div> }
            >
                <div class="qa-list__accordion">
                    <For
                        each=move || page.get().items
                        key=|record| {
                            record
                                .id
                                .as_ref()
                                .map(|id| id.to_string())
                                .unwrap_or_else(|| record.question.clone())
                        }
                        let:record
                    >
                        <details class="qa-item">
                            <summary class="qa-item__question">
                                <strong>{record.question.clone()}</strong>
                                <span class="qa-item__tag">
                                    {format!("{} / {}", record.category, record.language)}
                                </span>
                            </summary>
                            <div class="qa-item__body">
                                <p class="qa-item__label">"Explanation:"</p>
                                <div inner_html=sanitize_markup(&record.explanation)></div>
                                <p class="qa-item__label">"Real-Time Use Case:"</p>
                                <div inner_html=sanitize_markup(&record.usecase)></div>
                                <p class="qa-item__label">"Example Code:"</p>
                                <pre class="qa-item__code">{record.example_code.clone()}</pre>
                                <p class="qa-item__label">"Output:"</p>
                                <pre class="qa-item__output">{record.output.clone()}</pre>
                                <p class="qa-item__label">"Simple Summary:"</p>
                                <div inner_html=sanitize_markup(&record.summary)></div>
                            </div>
                        </details>
                    </For>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || page.get().page)
                    total_pages=Signal::derive(move || page.get().total_pages)
                    total_count=Signal::derive(move || page.get().total_count)
                    shown_from=Signal::derive(move || page.get().start)
                    shown_to=Signal::derive(move || page.get().end)
                    page_size=Signal::derive(move || ctx.query.with(|q| q.page_size))
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                />
            </Show>
        </div>
    }
}