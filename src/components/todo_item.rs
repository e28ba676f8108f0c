//! Todo Item Component
//!
//! A single todo row: checkbox, in-place title editing, and delete
//! with confirmation. The row owns only ephemeral view state; every
//! mutation goes through the callbacks supplied by the parent.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::CommandFuture;
use crate::components::Modal;
use crate::models::{normalize_title, Todo};

/// A single todo row
///
/// `on_toggle` is fire-and-forget; `on_delete` and `on_update` resolve
/// once the backend request settles, and the row keeps a busy flag
/// around them so their own buttons can't double-submit. The checkbox
/// is never gated by the busy flag.
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<(String, bool)>,
    #[prop(into)] on_delete: Callback<String, CommandFuture>,
    #[prop(into)] on_update: Callback<(String, String), CommandFuture>,
) -> impl IntoView {
    let Todo {
        id,
        title,
        completed,
    } = todo;
    let id = StoredValue::new(id);
    let title = StoredValue::new(title);

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(title.get_value());
    let (confirm_delete, set_confirm_delete) = signal(false);
    let (busy, set_busy) = signal(false);

    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Focus the edit input once it exists
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let start_editing = move || {
        set_draft.set(title.get_value());
        set_editing.set(true);
    };

    let save = move || {
        let Some(new_title) = normalize_title(&draft.get()) else {
            return;
        };
        set_busy.set(true);
        let pending = on_update.run((id.get_value(), new_title));
        spawn_local(async move {
            let result = pending.await;
            // The row can be re-rendered away while the request is in
            // flight; late writes to disposed signals are dropped.
            set_busy.try_set(false);
            if result.is_ok() {
                set_editing.try_set(false);
            }
        });
    };

    let cancel = move || {
        if busy.get() {
            return;
        }
        set_draft.set(title.get_value());
        set_editing.set(false);
    };

    let dismiss_delete = move || set_confirm_delete.set(false);

    let confirm_delete_now = move || {
        set_busy.set(true);
        let pending = on_delete.run(id.get_value());
        spawn_local(async move {
            // Busy clears and the overlay closes whether or not the
            // backend accepted the delete.
            let _ = pending.await;
            set_busy.try_set(false);
            set_confirm_delete.try_set(false);
        });
    };

    let can_save = move || !busy.get() && normalize_title(&draft.get()).is_some();

    view! {
        <div class=move || if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                class="todo-checkbox"
                checked=completed
                on:change=move |_| on_toggle.run((id.get_value(), !completed))
            />

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span
                        class=move || if completed { "todo-title completed" } else { "todo-title" }
                        on:dblclick=move |_| start_editing()
                    >
                        {title.get_value()}
                    </span>
                }
            >
                <div class="todo-edit">
                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        save();
                    }>
                        <input
                            type="text"
                            class="todo-edit-input"
                            node_ref=input_ref
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    cancel();
                                }
                            }
                        />
                    </form>
                    <button
                        class="save-btn"
                        disabled=move || !can_save()
                        on:click=move |_| save()
                    >
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        class="cancel-btn"
                        disabled=move || busy.get()
                        on:click=move |_| cancel()
                    >
                        "Cancel"
                    </button>
                </div>
            </Show>

            <Show when=move || !editing.get()>
                <div class="todo-actions">
                    <button class="edit-btn" on:click=move |_| start_editing()>"Edit"</button>
                    <button class="delete-btn" on:click=move |_| set_confirm_delete.set(true)>
                        "Delete"
                    </button>
                </div>
            </Show>

            <Modal
                open=confirm_delete
                on_close=Callback::new(move |_| dismiss_delete())
                title="Confirm Delete"
            >
                <div class="confirm-delete">
                    <p>"Are you sure you want to delete this todo?"</p>
                    <div class="confirm-delete-actions">
                        <button class="cancel-btn" on:click=move |_| dismiss_delete()>
                            "Cancel"
                        </button>
                        <button
                            class="confirm-btn"
                            disabled=move || busy.get()
                            on:click=move |_| confirm_delete_now()
                        >
                            {move || if busy.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </Modal>
        </div>
    }
}
