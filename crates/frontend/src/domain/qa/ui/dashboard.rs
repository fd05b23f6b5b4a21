use contracts::catalog;
use leptos::prelude::*;

use crate::layout::AppGlobalContext;

/// One card per catalog category: icon, name, count badge, language
/// preview. A click filters the list by that category.
#[component]
#[allow(non_snake_case)]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <div class="dashboard">
            <h4 class="dashboard__heading">"Types Dashboard"</h4>
            <div class="dashboard__grid">
                {catalog::CATEGORIES
                    .iter()
                    .map(|category| {
                        let name = category.name;
                        let preview = preview_languages(category);
                        view! {
                            <div
                                class="dashboard__card"
                                role="button"
                                on:click=move |_| ctx.open_category(name)
                            >
                                <div class="dashboard__card-title">
                                    <span class="dashboard__icon">{category.icon}</span>
                                    <span>{name}</span>
                                    <span class="dashboard__badge">
                                        {move || ctx.count_for(name)}
                                    </span>
                                </div>
                                <div class="dashboard__card-preview">{preview}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn preview_languages(category: &catalog::Category) -> String {
    let mut preview = category.languages[..category.languages.len().min(3)].join(", ");
    if category.languages.len() > 3 {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_shows_at_most_three_languages() {
        let front_end = catalog::category("Front-End").unwrap();
        assert_eq!(preview_languages(front_end), "HTML, CSS, JQuery...");

        let load = catalog::category("Load Testing").unwrap();
        assert_eq!(preview_languages(load), "JMeter");
    }
}
