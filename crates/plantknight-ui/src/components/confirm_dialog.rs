//! Modal asking the user to confirm a destructive action

use leptos::prelude::*;

/// Confirmation modal. Clicking the overlay counts as cancel. While `busy`
/// both buttons are disabled.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(default = "Confirm")] confirm_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-content" role="dialog" on:click=|e| e.stop_propagation()>
                <h2>{title}</h2>
                <p>{message}</p>
                <div class="form-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="btn-danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
