use axum::extract::{Path, State};
use axum::{http::StatusCode, Json};
use tracing::{error, info};

use crate::error::AppError;
use crate::extract::{ListQuery, TodoBody};
use crate::models::{EmptyResp, ListFilter, ListTodos, Todo};
use crate::services::{with_deadline, RemoteError, TodoService};
use crate::AppState;

fn failed(action: &'static str) -> impl FnOnce(RemoteError) -> AppError {
    move |err| {
        error!(error = %err, "failed to {action}");
        AppError::from(err)
    }
}

pub async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    TodoBody(body): TodoBody,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = with_deadline(state.config.ctx_timeout, state.todos.create(body))
        .await
        .map_err(failed("create todo"))?;

    info!(id = %todo.id, title = %todo.title, "Created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let todo = with_deadline(state.config.ctx_timeout, state.todos.get(id))
        .await
        .map_err(failed("get todo"))?;

    Ok(Json(todo))
}

pub async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
    ListQuery(params): ListQuery,
) -> Result<Json<ListTodos>, AppError> {
    let deadline = state.config.ctx_timeout;

    let list = match params.filter {
        ListFilter::NoFilter => {
            with_deadline(deadline, state.todos.list(params.page, params.limit)).await
        }
        ListFilter::Overdue(time) => {
            with_deadline(
                deadline,
                state.todos.list_overdue(time, params.page, params.limit),
            )
            .await
        }
    }
    .map_err(failed("list todos"))?;

    info!(count = list.todos.len(), page = params.page, "Listed todos");
    Ok(Json(list))
}

pub async fn update_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    TodoBody(mut body): TodoBody,
) -> Result<Json<Todo>, AppError> {
    body.id = id;

    let todo = with_deadline(state.config.ctx_timeout, state.todos.update(body))
        .await
        .map_err(failed("update todo"))?;

    info!(id = %todo.id, status = %todo.status, "Updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<EmptyResp>, AppError> {
    let ack = with_deadline(state.config.ctx_timeout, state.todos.delete(id.clone()))
        .await
        .map_err(failed("delete todo"))?;

    info!(%id, "Deleted todo");
    Ok(Json(ack))
}
