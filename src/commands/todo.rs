//! Todo Commands
//!
//! Frontend bindings for todo-related backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, js_error_to_string};
use crate::models::Todo;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct ToggleTodoArgs<'a> {
    id: &'a str,
    completed: bool,
}

#[derive(Serialize)]
struct UpdateTodoArgs<'a> {
    id: &'a str,
    title: &'a str,
}

// ========================
// Commands
// ========================

pub async fn list_todos() -> Result<Vec<Todo>, String> {
    let result = invoke("list_todos", JsValue::NULL)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_todo(args: &CreateTodoArgs<'_>) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_todo", js_args)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Set the completed flag to the given value
pub async fn toggle_todo(id: &str, completed: bool) -> Result<Todo, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&ToggleTodoArgs { id, completed }).map_err(|e| e.to_string())?;
    let result = invoke("toggle_todo", js_args)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_todo(id: &str, title: &str) -> Result<Todo, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&UpdateTodoArgs { id, title }).map_err(|e| e.to_string())?;
    let result = invoke("update_todo", js_args)
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_todo(id: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_todo", js_args)
        .await
        .map_err(js_error_to_string)?;
    Ok(())
}
