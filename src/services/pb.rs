//! Wire messages of the `todo.TodoService` gRPC contract.

use crate::models;

#[derive(Clone, PartialEq, prost::Message)]
pub struct Todo {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub assignee: String,
    #[prost(string, tag = "3")]
    pub title: String,
    #[prost(string, tag = "4")]
    pub summary: String,
    #[prost(string, tag = "5")]
    pub deadline: String,
    #[prost(string, tag = "6")]
    pub status: String,
    #[prost(string, tag = "7")]
    pub created_at: String,
    #[prost(string, tag = "8")]
    pub updated_at: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TodoFunc {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub assignee: String,
    #[prost(string, tag = "3")]
    pub title: String,
    #[prost(string, tag = "4")]
    pub summary: String,
    #[prost(string, tag = "5")]
    pub deadline: String,
    #[prost(string, tag = "6")]
    pub status: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ByIdReq {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListReq {
    #[prost(int64, tag = "1")]
    pub page: i64,
    #[prost(int64, tag = "2")]
    pub limit: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Time {
    #[prost(string, tag = "1")]
    pub time: String,
    #[prost(int64, tag = "2")]
    pub page: i64,
    #[prost(int64, tag = "3")]
    pub limit: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListTodos {
    #[prost(message, repeated, tag = "1")]
    pub todos: Vec<Todo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EmptyResp {}

impl From<Todo> for models::Todo {
    fn from(todo: Todo) -> Self {
        models::Todo {
            id: todo.id,
            assignee: todo.assignee,
            title: todo.title,
            summary: todo.summary,
            deadline: todo.deadline,
            status: todo.status,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

impl From<ListTodos> for models::ListTodos {
    fn from(list: ListTodos) -> Self {
        models::ListTodos {
            todos: list.todos.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<EmptyResp> for models::EmptyResp {
    fn from(_: EmptyResp) -> Self {
        models::EmptyResp {}
    }
}

impl From<models::TodoFunc> for TodoFunc {
    fn from(todo: models::TodoFunc) -> Self {
        TodoFunc {
            id: todo.id,
            assignee: todo.assignee,
            title: todo.title,
            summary: todo.summary,
            deadline: todo.deadline,
            status: todo.status,
        }
    }
}
