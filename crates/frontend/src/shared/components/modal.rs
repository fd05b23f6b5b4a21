use leptos::prelude::*;

/// Minimal centered confirmation dialog.
///
/// Shown while `open` is true; the confirm button is optional so the same
/// frame serves both acknowledgments ("Saved") and confirmations
/// ("Logout?").
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    /// Confirm button label; `None` renders an OK-only dialog
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional)] on_confirm: Option<Callback<()>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal__backdrop" on:click=move |_| on_close.run(())>
                <div class="modal__frame" on:click=|ev| ev.stop_propagation()>
                    <div class="modal__header">
                        <span class="modal__title">{title.clone()}</span>
                        <button class="modal__close" on:click=move |_| on_close.run(())>
                            "\u{2715}"
                        </button>
                    </div>
                    <div class="modal__body">{body.clone()}</div>
                    <div class="modal__footer">
                        {confirm_label.clone().map(|label| view! {
                            <button
                                class="btn btn--primary"
                                on:click=move |_| {
                                    if let Some(cb) = on_confirm {
                                        cb.run(());
                                    }
                                }
                            >
                                {label}
                            </button>
                        })}
                        <button class="btn" on:click=move |_| on_close.run(())>
                            {if confirm_label.is_some() { "Cancel" } else { "OK" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
