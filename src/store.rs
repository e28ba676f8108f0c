//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, in backend order
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the full todo list (initial load)
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    store.todos().set(todos);
}

/// Add a todo to the store
pub fn store_add_todo(store: &AppStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Update a todo in the store by ID
pub fn store_update_todo(store: &AppStore, updated: Todo) {
    replace_todo(&mut store.todos().write(), updated);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, id: &str) {
    remove_todo(&mut store.todos().write(), id);
}

/// Replace the record with the same id; returns false if absent.
pub(crate) fn replace_todo(todos: &mut [Todo], updated: Todo) -> bool {
    match todos.iter_mut().find(|todo| todo.id == updated.id) {
        Some(todo) => {
            *todo = updated;
            true
        }
        None => false,
    }
}

/// Remove the record with the given id; returns false if absent.
pub(crate) fn remove_todo(todos: &mut Vec<Todo>, id: &str) -> bool {
    let before = todos.len();
    todos.retain(|todo| todo.id != id);
    todos.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, title: &str) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            completed: false,
        }
    }

    #[test]
    fn replace_swaps_matching_record_in_place() {
        let mut todos = vec![todo("1", "one"), todo("2", "two")];
        let mut updated = todo("2", "two, revised");
        updated.completed = true;

        assert!(replace_todo(&mut todos, updated));
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].title, "two, revised");
        assert!(todos[1].completed);
        assert_eq!(todos[0].title, "one");
    }

    #[test]
    fn replace_unknown_id_leaves_list_untouched() {
        let mut todos = vec![todo("1", "one")];
        assert!(!replace_todo(&mut todos, todo("9", "nine")));
        assert_eq!(todos, vec![todo("1", "one")]);
    }

    #[test]
    fn remove_drops_only_the_matching_record() {
        let mut todos = vec![todo("1", "one"), todo("2", "two"), todo("3", "three")];
        assert!(remove_todo(&mut todos, "2"));
        assert_eq!(todos.len(), 2);
        assert!(todos.iter().all(|t| t.id != "2"));
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut todos = vec![todo("1", "one")];
        assert!(!remove_todo(&mut todos, "9"));
        assert_eq!(todos.len(), 1);
    }
}
