use leptos::prelude::*;

use crate::domain::qa::ui::list::state::PAGE_SIZE_OPTIONS;

const MAX_PAGE_BUTTONS: usize = 7;

/// The numbered-button window around the current page: up to
/// [`MAX_PAGE_BUTTONS`] pages, shifted so it never runs past the last page.
pub fn page_window(current: usize, total_pages: usize) -> std::ops::RangeInclusive<usize> {
    let mut from = current.saturating_sub(MAX_PAGE_BUTTONS / 2).max(1);
    let mut to = from + MAX_PAGE_BUTTONS - 1;
    if to > total_pages {
        to = total_pages;
        from = to.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1);
    }
    from..=to
}

/// PaginationControls component - reusable 1-indexed pagination controls
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed, already clamped)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of filtered items
    #[prop(into)]
    total_count: Signal<usize>,

    /// 1-based bounds of the visible slice (0 when empty)
    #[prop(into)]
    shown_from: Signal<usize>,
    #[prop(into)]
    shown_to: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <div class="pagination-size">
                <span class="pagination-muted">"Show"</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(5);
                        on_page_size_change.run(val);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <span class="pagination-muted">"per page"</span>
            </div>

            <div class="pagination-pages">
                <span class="pagination-info">
                    {move || {
                        format!(
                            "Showing {} - {} of {}",
                            shown_from.get(),
                            shown_to.get(),
                            total_count.get()
                        )
                    }}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(1)
                    disabled=move || current_page.get() <= 1
                    title="First page"
                >
                    "\u{00ab}"
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                >
                    "Prev"
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .map(|p| {
                            let class = if p == current {
                                "pagination-btn pagination-btn--active"
                            } else {
                                "pagination-btn"
                            };
                            view! {
                                <button class=class on:click=move |_| on_page_change.run(p)>
                                    {p.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                >
                    "Next"
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(total_pages.get())
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Last page"
                >
                    "\u{00bb}"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_stays_within_bounds() {
        assert_eq!(page_window(1, 3), 1..=3);
        assert_eq!(page_window(1, 20), 1..=7);
        assert_eq!(page_window(10, 20), 7..=13);
        assert_eq!(page_window(20, 20), 14..=20);
        assert_eq!(page_window(1, 1), 1..=1);
    }
}
