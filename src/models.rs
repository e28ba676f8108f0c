//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Trim a title and reject empty results.
///
/// Both the save path of a row and the create form use this: a
/// whitespace-only title never reaches the backend.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_title("  Buy milk "), Some("Buy milk".to_string()));
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(
            normalize_title("water the  plants"),
            Some("water the  plants".to_string())
        );
    }

    #[test]
    fn normalize_rejects_empty_and_whitespace_only() {
        assert_eq!(normalize_title(""), None);
        assert_eq!(normalize_title("   "), None);
        assert_eq!(normalize_title("\t\n"), None);
    }

    #[test]
    fn todo_matches_backend_json() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":"a1b2","title":"Buy milk","completed":false}"#)
                .expect("backend shape should deserialize");
        assert_eq!(todo.id, "a1b2");
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }
}
