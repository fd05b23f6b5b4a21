use leptos::prelude::*;

use crate::layout::{AppGlobalContext, AppTab};
use crate::shared::components::modal::ConfirmDialog;

/// Top navigation: brand, the two tabs, and the logout action with its
/// confirmation dialog.
#[component]
#[allow(non_snake_case)]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let logout_open = RwSignal::new(false);

    let tab_class = move |tab: AppTab| {
        if ctx.active_tab.get() == tab {
            "nav__link nav__link--active"
        } else {
            "nav__link"
        }
    };

    view! {
        <nav class="nav">
            <span class="nav__brand">"InterviewHub"</span>
            <button
                class=move || tab_class(AppTab::Dashboard)
                on:click=move |_| ctx.active_tab.set(AppTab::Dashboard)
            >
                "Dashboard"
            </button>
            <button
                class=move || tab_class(AppTab::Qa)
                on:click=move |_| {
                    ctx.active_tab.set(AppTab::Qa);
                    ctx.show_form.set(true);
                }
            >
                "Question & Answer"
            </button>
            <button class="nav__link nav__logout" on:click=move |_| logout_open.set(true)>
                "Logout"
            </button>

            <ConfirmDialog
                open=logout_open
                title="Logout"
                body="Clear the current session and return to the dashboard?"
                confirm_label="Logout".to_string()
                on_confirm=Callback::new(move |_| {
                    ctx.logout();
                    logout_open.set(false);
                })
                on_close=Callback::new(move |_| logout_open.set(false))
            />
        </nav>
    }
}
