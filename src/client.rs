// Resource client: turns fetch/list/create/update/delete on users, posts
// and comments into HTTP calls and normalizes every outcome into an
// `OperationResult`. Nothing here panics or bubbles a transport error up
// as anything other than an `ApiError` value.

use crate::config::Config;
use crate::data::{Comment, Post, Record, User};
use crate::error::{ApiError, OperationResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Category of remote entity, each with its own route prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    User,
    Post,
    Comment,
}

impl ResourceKind {
    /// Route segment under the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::User => "users",
            ResourceKind::Post => "posts",
            ResourceKind::Comment => "comments",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Post => "post",
            ResourceKind::Comment => "comment",
        }
    }

    /// Capitalized name used at the start of confirmation messages.
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::User => "User",
            ResourceKind::Post => "Post",
            ResourceKind::Comment => "Comment",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Client for the users/posts/comments API. Holds the base URL and the
/// transport used to reach it; neither changes after construction.
#[derive(Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
}

impl ApiClient<ReqwestTransport> {
    /// Create a client that talks to `config.base_url` over reqwest.
    pub fn from_config(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::new().context("Failed to build HTTP client")?;
        Ok(ApiClient::with_transport(config, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        ApiClient {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/{kind}/{id}`. Returns the decoded body on 200.
    pub fn fetch(&self, kind: ResourceKind, id: &str) -> OperationResult {
        let message = match kind {
            ResourceKind::User => format!("Failed to fetch data for user {}.", id),
            _ => format!("Failed to fetch {} {}.", kind, id),
        };
        self.request_json(HttpMethod::Get, self.url(kind, Some(id)), None, 200, message)
    }

    /// GET `/users`. Returns the decoded list on 200.
    pub fn list_all(&self) -> OperationResult {
        self.request_json(
            HttpMethod::Get,
            self.url(ResourceKind::User, None),
            None,
            200,
            "Failed to fetch data for all users.".into(),
        )
    }

    /// POST `/{kind}` with the record as JSON. Expects 201.
    pub fn create<R: Record + ?Sized>(&self, kind: ResourceKind, record: &R) -> OperationResult {
        self.request_json(
            HttpMethod::Post,
            self.url(kind, None),
            Some(record.to_json()),
            201,
            format!("Failed to create {}.", kind),
        )
    }

    /// PUT `/{kind}/{id}` replacing the whole record. Expects 200.
    pub fn update<R: Record + ?Sized>(
        &self,
        kind: ResourceKind,
        id: &str,
        record: &R,
    ) -> OperationResult {
        self.request_json(
            HttpMethod::Put,
            self.url(kind, Some(id)),
            Some(record.to_json()),
            200,
            format!("Failed to update {}.", kind),
        )
    }

    /// DELETE `/{kind}/{id}`. On 200 the result is a confirmation
    /// message; the response body is ignored.
    pub fn delete(&self, kind: ResourceKind, id: &str) -> OperationResult<String> {
        let message = format!("Failed to delete {} {}.", kind, id);
        self.send(HttpMethod::Delete, self.url(kind, Some(id)), None, 200, message)?;
        Ok(format!("{} {} deleted successfully.", kind.title(), id))
    }

    pub fn get_post(&self, post_id: &str) -> OperationResult {
        self.fetch(ResourceKind::Post, post_id)
    }

    pub fn get_comment(&self, comment_id: &str) -> OperationResult {
        self.fetch(ResourceKind::Comment, comment_id)
    }

    pub fn get_user(&self, user_id: &str) -> OperationResult {
        self.fetch(ResourceKind::User, user_id)
    }

    pub fn get_all_users(&self) -> OperationResult {
        self.list_all()
    }

    pub fn create_post(&self, post: &Post) -> OperationResult {
        self.create(ResourceKind::Post, post)
    }

    pub fn update_post(&self, post_id: &str, post: &Post) -> OperationResult {
        self.update(ResourceKind::Post, post_id, post)
    }

    pub fn delete_post(&self, post_id: &str) -> OperationResult<String> {
        self.delete(ResourceKind::Post, post_id)
    }

    pub fn create_user(&self, user: &User) -> OperationResult {
        self.create(ResourceKind::User, user)
    }

    pub fn create_comment(&self, comment: &Comment) -> OperationResult {
        self.create(ResourceKind::Comment, comment)
    }

    fn url(&self, kind: ResourceKind, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, kind.path(), id),
            None => format!("{}/{}", self.base_url, kind.path()),
        }
    }

    fn request_json(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<Value>,
        expected: u16,
        message: String,
    ) -> OperationResult {
        // `send` consumes the message on failure, keep a copy for decoding
        let response = self.send(method, url, body, expected, message.clone())?;
        serde_json::from_str(&response.body).map_err(|source| {
            warn!(status = response.status, error = %source, "response body is not JSON");
            ApiError::Decode {
                message,
                status_code: response.status,
                source,
            }
        })
    }

    /// Execute one request and check the status. Exactly one attempt.
    fn send(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<Value>,
        expected: u16,
        message: String,
    ) -> OperationResult<HttpResponse> {
        let request = HttpRequest { method, url, body };
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = match self.transport.execute(&request) {
            Ok(response) => response,
            Err(source) => {
                warn!(method = %request.method, url = %request.url, error = %source, "transport fault");
                return Err(ApiError::Transport { message, source });
            }
        };

        if response.status != expected {
            warn!(
                method = %request.method,
                url = %request.url,
                status = response.status,
                expected,
                "unexpected status"
            );
            return Err(ApiError::Rejected {
                message,
                status_code: response.status,
                reason: response.reason,
            });
        }
        debug!(status = response.status, "request succeeded");
        Ok(response)
    }
}
