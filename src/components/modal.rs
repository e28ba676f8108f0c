//! Modal Component
//!
//! Overlay dialog used to gate destructive actions.

use leptos::prelude::*;

/// Overlay dialog with a title bar and caller-supplied body.
///
/// The backdrop stays mounted and is hidden by class while closed; the
/// body renders only while open. Clicking the backdrop or the × button
/// asks the owner to close, clicks inside the dialog do not propagate.
#[component]
pub fn Modal(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div
            class=move || if open.get() { "modal-backdrop" } else { "modal-backdrop hidden" }
            on:click=move |_| on_close.run(())
        >
            <div class="modal" on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <span class="modal-title">{title}</span>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <Show when=move || open.get()>
                    {children()}
                </Show>
            </div>
        </div>
    }
}
