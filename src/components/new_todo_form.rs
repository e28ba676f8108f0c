//! New Todo Form Component
//!
//! Form for creating new todos.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, CreateTodoArgs};
use crate::models::normalize_title;
use crate::store::{store_add_todo, use_app_store};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(title) = normalize_title(&new_title.get()) else {
            return;
        };

        spawn_local(async move {
            let args = CreateTodoArgs { title: &title };
            if let Ok(created) = commands::create_todo(&args).await {
                set_new_title.set(String::new());
                store_add_todo(&store, created);
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_title.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
