//! Capabilities of the remote todo service and the gRPC client that provides them.

mod grpc;
pub mod pb;

use std::future::Future;
use std::time::Duration;

use crate::models::{EmptyResp, ListTodos, Todo, TodoFunc};

pub use grpc::GrpcTodoService;

/// The operations the remote todo service exposes.
///
/// Implementations must be cheap to clone and safe to share between
/// concurrent requests.
pub trait TodoService: Clone + Send + Sync + 'static {
    fn create(&self, todo: TodoFunc) -> impl Future<Output = Result<Todo, RemoteError>> + Send;

    fn get(&self, id: String) -> impl Future<Output = Result<Todo, RemoteError>> + Send;

    fn list(
        &self,
        page: i64,
        limit: i64,
    ) -> impl Future<Output = Result<ListTodos, RemoteError>> + Send;

    fn list_overdue(
        &self,
        time: String,
        page: i64,
        limit: i64,
    ) -> impl Future<Output = Result<ListTodos, RemoteError>> + Send;

    fn update(&self, todo: TodoFunc) -> impl Future<Output = Result<Todo, RemoteError>> + Send;

    fn delete(&self, id: String) -> impl Future<Output = Result<EmptyResp, RemoteError>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteError {
    Status { code: tonic::Code, message: String },
    DeadlineExceeded,
}

impl RemoteError {
    pub fn new(code: tonic::Code, message: impl Into<String>) -> Self {
        RemoteError::Status {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Status { code, message } => {
                write!(f, "rpc error: code = {code:?} desc = {message}")
            }
            RemoteError::DeadlineExceeded => {
                write!(f, "rpc error: code = DeadlineExceeded desc = context deadline exceeded")
            }
        }
    }
}

impl std::error::Error for RemoteError {}

impl From<tonic::Status> for RemoteError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::DeadlineExceeded => RemoteError::DeadlineExceeded,
            code => RemoteError::new(code, status.message()),
        }
    }
}

/// Runs one remote call, abandoning it once `deadline` has elapsed.
pub async fn with_deadline<T, F>(deadline: Duration, call: F) -> Result<T, RemoteError>
where
    F: Future<Output = Result<T, RemoteError>>,
{
    tokio::time::timeout(deadline, call)
        .await
        .unwrap_or(Err(RemoteError::DeadlineExceeded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_renders_code_and_message() {
        let err = RemoteError::from(tonic::Status::not_found("todo not found"));
        assert_eq!(err.to_string(), "rpc error: code = NotFound desc = todo not found");
    }

    #[test]
    fn remote_deadline_is_a_deadline() {
        let err = RemoteError::from(tonic::Status::deadline_exceeded("too slow"));
        assert_eq!(err, RemoteError::DeadlineExceeded);
    }

    #[tokio::test]
    async fn deadline_cuts_off_slow_calls() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, RemoteError>(())
        };
        let started = std::time::Instant::now();
        let result = with_deadline(Duration::from_millis(50), slow).await;
        assert_eq!(result, Err(RemoteError::DeadlineExceeded));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn fast_calls_pass_through() {
        let result = with_deadline(Duration::from_secs(1), async { Ok::<_, RemoteError>(7) }).await;
        assert_eq!(result, Ok(7));
    }
}
