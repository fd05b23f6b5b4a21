use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::qa::api::HttpStore;
use crate::domain::qa::ui::dashboard::Dashboard;
use crate::domain::qa::ui::form::QaForm;
use crate::domain::qa::ui::list::QaList;
use crate::layout::header::Header;
use crate::layout::{AppGlobalContext, AppTab};

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Initial load: two independent fetches with no ordering requirement;
    // either may fail without affecting the other.
    spawn_local(async move { ctx.refresh_list(&HttpStore).await });
    spawn_local(async move { ctx.refresh_counts(&HttpStore).await });

    view! {
        <Header />
        <main class="app__content">
            {move || match ctx.active_tab.get() {
                AppTab::Dashboard => view! { <Dashboard /> }.into_any(),
                AppTab::Qa => view! {
                    <Show when=move || ctx.show_form.get()>
                        <QaForm />
                        <hr class="app__divider" />
                    </Show>
                    <QaList />
                }
                .into_any(),
            }}
        </main>
    }
}
