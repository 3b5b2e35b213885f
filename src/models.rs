use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub assignee: String,
    pub title: String,
    pub summary: String,
    pub deadline: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Writable fields of a todo. `id` only ever comes from the URL path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFunc {
    pub id: String,
    pub assignee: String,
    pub title: String,
    pub summary: String,
    pub deadline: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTodos {
    pub todos: Vec<Todo>,
}

/// Acknowledgement returned for a delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyResp {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    NoFilter,
    /// Only todos whose deadline passed before this time.
    Overdue(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryParams {
    pub page: i64,
    pub limit: i64,
    pub filter: ListFilter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardErrorModel {
    pub error: String,
}
