use std::time::Duration;

use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tracing::{error, info};

use super::{pb, RemoteError, TodoService};
use crate::models::{EmptyResp, ListTodos, Todo, TodoFunc};

/// Startup dial is cut short after this; the lazy channel keeps retrying.
const DIAL_TIMEOUT: Duration = Duration::from_millis(500);

/// Plaintext gRPC client for `todo.TodoService`, sharing one channel.
///
/// `inner` is `None` when the configured address could not be parsed; every
/// call then fails with `Unavailable`.
#[derive(Clone)]
pub struct GrpcTodoService {
    inner: Option<tonic::client::Grpc<Channel>>,
    target: String,
    timeout: Duration,
}

impl GrpcTodoService {
    /// Dials the service. Neither a bad address nor a failed dial stops
    /// startup: both are logged, and calls fail individually instead.
    pub async fn connect(uri: String, timeout: Duration) -> Self {
        let endpoint = match Endpoint::from_shared(uri.clone()) {
            Ok(endpoint) => endpoint.connect_timeout(timeout),
            Err(err) => {
                error!(%uri, error = %err, "gRPC dial error");
                return GrpcTodoService {
                    inner: None,
                    target: uri,
                    timeout,
                };
            }
        };

        let channel = match tokio::time::timeout(DIAL_TIMEOUT, endpoint.connect()).await {
            Ok(Ok(channel)) => {
                info!(%uri, "connected to todo service");
                channel
            }
            Ok(Err(err)) => {
                error!(%uri, error = %err, "gRPC dial error");
                endpoint.connect_lazy()
            }
            Err(_) => {
                error!(%uri, "gRPC dial timed out");
                endpoint.connect_lazy()
            }
        };

        GrpcTodoService {
            inner: Some(tonic::client::Grpc::new(channel)),
            target: uri,
            timeout,
        }
    }

    async fn unary<Req, Resp>(&self, path: &'static str, message: Req) -> Result<Resp, RemoteError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let Some(mut grpc) = self.inner.clone() else {
            return Err(RemoteError::new(
                tonic::Code::Unavailable,
                format!("invalid todo service address {:?}", self.target),
            ));
        };
        grpc.ready().await.map_err(|err| {
            RemoteError::new(
                tonic::Code::Unavailable,
                format!("service was not ready: {err}"),
            )
        })?;

        let mut request = tonic::Request::new(message);
        request.set_timeout(self.timeout);

        let response = grpc
            .unary(request, PathAndQuery::from_static(path), ProstCodec::default())
            .await?;
        Ok(response.into_inner())
    }
}

impl TodoService for GrpcTodoService {
    async fn create(&self, todo: TodoFunc) -> Result<Todo, RemoteError> {
        let todo: pb::Todo = self
            .unary("/todo.TodoService/Create", pb::TodoFunc::from(todo))
            .await?;
        Ok(todo.into())
    }

    async fn get(&self, id: String) -> Result<Todo, RemoteError> {
        let todo: pb::Todo = self
            .unary("/todo.TodoService/Get", pb::ByIdReq { id })
            .await?;
        Ok(todo.into())
    }

    async fn list(&self, page: i64, limit: i64) -> Result<ListTodos, RemoteError> {
        let list: pb::ListTodos = self
            .unary("/todo.TodoService/List", pb::ListReq { page, limit })
            .await?;
        Ok(list.into())
    }

    async fn list_overdue(
        &self,
        time: String,
        page: i64,
        limit: i64,
    ) -> Result<ListTodos, RemoteError> {
        let list: pb::ListTodos = self
            .unary(
                "/todo.TodoService/ListOverdue",
                pb::Time { time, page, limit },
            )
            .await?;
        Ok(list.into())
    }

    async fn update(&self, todo: TodoFunc) -> Result<Todo, RemoteError> {
        let todo: pb::Todo = self
            .unary("/todo.TodoService/Update", pb::TodoFunc::from(todo))
            .await?;
        Ok(todo.into())
    }

    async fn delete(&self, id: String) -> Result<EmptyResp, RemoteError> {
        let ack: pb::EmptyResp = self
            .unary("/todo.TodoService/Delete", pb::ByIdReq { id })
            .await?;
        Ok(ack.into())
    }
}
