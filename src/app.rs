//! Todo Frontend App
//!
//! Root component: store setup, initial load, and layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NewTodoForm, TodoList};
use crate::store::{store_set_todos, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide the store to all children
    provide_context(store);

    // Load todos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", loaded.len()).into());
                    store_set_todos(&store, loaded);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Load failed: {}", err).into());
                }
            }
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <TodoList />

            <p class="todo-count">{move || format!("{} todos", store.todos().get().len())}</p>
        </main>
    }
}
