//! Todo List Component
//!
//! Renders one row per todo and bridges row callbacks to the backend
//! commands and the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CommandFuture};
use crate::components::TodoItem;
use crate::store::{store_remove_todo, store_update_todo, use_app_store, AppStateStoreFields};

/// List of todo rows
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let on_toggle = Callback::new(move |(id, completed): (String, bool)| {
        spawn_local(async move {
            if let Ok(updated) = commands::toggle_todo(&id, completed).await {
                store_update_todo(&store, updated);
            }
        });
    });

    let on_update = Callback::new(move |(id, title): (String, String)| -> CommandFuture {
        Box::pin(async move {
            let updated = commands::update_todo(&id, &title).await?;
            store_update_todo(&store, updated);
            Ok(())
        })
    });

    let on_delete = Callback::new(move |id: String| -> CommandFuture {
        Box::pin(async move {
            commands::delete_todo(&id).await?;
            store_remove_todo(&store, &id);
            Ok(())
        })
    });

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().get()
                // Key on the mutable fields too, so a changed record
                // re-creates its row with fresh local state
                key=|todo| (todo.id.clone(), todo.title.clone(), todo.completed)
                children=move |todo| {
                    view! {
                        <li class="todo-list-entry">
                            <TodoItem
                                todo=todo
                                on_toggle=on_toggle
                                on_delete=on_delete
                                on_update=on_update
                            />
                        </li>
                    }
                }
            />
        </ul>
    }
}
