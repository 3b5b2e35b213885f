use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde_json::{Map, Value};
use tracing::error;

use crate::error::{AppError, FieldError};
use crate::models::{ListQueryParams, TodoFunc};
use crate::query::{parse_list_query, Defaults};
use crate::services::TodoService;
use crate::AppState;

/// A validated create/update body. Its `id` is always empty; callers take
/// the id from the path.
pub struct TodoBody(pub TodoFunc);

/// Normalized parameters of a list request.
pub struct ListQuery(pub ListQueryParams);

impl<S> FromRequest<S> for TodoBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|err| {
            error!(error = %err, "failed to bind json");
            AppError::BadRequest(format!("invalid JSON body: {err}"))
        })?;

        validate_todo_func(&value).map(TodoBody).map_err(|errors| {
            let err = AppError::from(errors);
            error!(?err, "failed to bind json");
            err
        })
    }
}

impl<S> FromRequestParts<AppState<S>> for ListQuery
where
    S: TodoService,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let defaults = Defaults {
            page: state.config.default_page,
            limit: state.config.default_limit,
        };

        parse_list_query(&pairs, defaults)
            .map(ListQuery)
            .map_err(|errors| {
                let err = AppError::from(errors);
                error!(?err, "failed to parse query params");
                err
            })
    }
}

/// Checks that every writable field is present and a string.
pub fn validate_todo_func(value: &Value) -> Result<TodoFunc, Vec<FieldError>> {
    let Some(object) = value.as_object() else {
        return Err(vec![FieldError {
            field: "body",
            message: "must be a JSON object",
        }]);
    };

    let mut errors = Vec::new();
    let mut field = |name: &'static str| string_field(object, name, &mut errors);

    let todo = TodoFunc {
        id: String::new(),
        assignee: field("assignee"),
        title: field("title"),
        summary: field("summary"),
        deadline: field("deadline"),
        status: field("status"),
    };

    if errors.is_empty() {
        Ok(todo)
    } else {
        Err(errors)
    }
}

fn string_field(
    object: &Map<String, Value>,
    name: &'static str,
    errors: &mut Vec<FieldError>,
) -> String {
    match object.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            errors.push(FieldError {
                field: name,
                message: "must be a string",
            });
            String::new()
        }
        None => {
            errors.push(FieldError {
                field: name,
                message: "is required",
            });
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn complete_body_is_accepted() {
        let todo = validate_todo_func(&json!({
            "assignee": "alice",
            "title": "Buy milk",
            "summary": "",
            "deadline": "2024-01-01",
            "status": "open",
        }))
        .unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.summary, "");
        assert!(todo.id.is_empty());
    }

    #[test]
    fn body_id_is_ignored() {
        let todo = validate_todo_func(&json!({
            "id": "injected",
            "assignee": "a",
            "title": "t",
            "summary": "s",
            "deadline": "d",
            "status": "open",
        }))
        .unwrap();
        assert!(todo.id.is_empty());
    }

    #[test]
    fn every_problem_is_listed() {
        let errors = validate_todo_func(&json!({
            "assignee": 5,
            "title": "t",
            "deadline": "2024-01-01",
        }))
        .unwrap_err();
        let rendered: Vec<_> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "assignee: must be a string",
                "summary: is required",
                "status: is required",
            ]
        );
    }

    #[test]
    fn non_object_is_rejected() {
        let errors = validate_todo_func(&json!(["title"])).unwrap_err();
        assert_eq!(errors[0].field, "body");
    }
}
