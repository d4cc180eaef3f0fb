use crate::{CliClientResult, ClientError, identity_from_token};

use todo_auth::{AccessEvaluator, IdentityContext, Operation};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the todo-server REST API.
///
/// Every call is checked against the caller's own claims first, so requests
/// the server would refuse are never sent.
pub struct Client {
    pub base_url: String,
    token: String,
    identity: IdentityContext,
    evaluator: AccessEvaluator,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `token` - Bearer access token; its claims are read (not verified) locally
    pub fn new(base_url: &str, token: &str) -> CliClientResult<Self> {
        let token = token.trim().to_string();
        let identity = identity_from_token(&token)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            identity,
            evaluator: AccessEvaluator::default(),
            client: ReqwestClient::new(),
        })
    }

    /// Use a different access policy for local pre-checks
    pub fn with_evaluator(mut self, evaluator: AccessEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Identity read from the token
    pub fn identity(&self) -> &IdentityContext {
        &self.identity
    }

    /// Refuse an operation the caller's roles and scopes do not allow
    #[track_caller]
    fn precheck(&self, operation: Operation) -> CliClientResult<()> {
        self.evaluator
            .authorize(&self.identity, operation)
            .into_result()
            .map_err(|reason| ClientError::Denied {
                operation,
                reason,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Build a request carrying the bearer token
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url).bearer_auth(&self.token)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        let (code, message) = match body.get("error") {
            Some(error) => (
                error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string(),
                error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string(),
            ),
            None => (status.as_u16().to_string(), text),
        };

        Err(ClientError::api_error(code, message))
    }

    // =========================================================================
    // Todo Operations
    // =========================================================================

    /// List the todos visible to the caller
    pub async fn list_todos(&self) -> CliClientResult<Value> {
        self.precheck(Operation::List)?;

        let req = self.request(Method::GET, "/api/todolist");
        self.execute(req).await
    }

    /// Get a todo by ID
    pub async fn get_todo(&self, id: i64) -> CliClientResult<Value> {
        self.precheck(Operation::ReadOne)?;

        let req = self.request(Method::GET, &format!("/api/todolist/{}", id));
        self.execute(req).await
    }

    /// Create a todo. The owner defaults to the caller.
    pub async fn create_todo(&self, title: &str, owner: Option<&str>) -> CliClientResult<Value> {
        self.precheck(Operation::Create)?;

        #[derive(Serialize)]
        struct CreateRequest<'a> {
            title: &'a str,
            owner: String,
        }

        let body = CreateRequest {
            title,
            owner: self.evaluator.owner_for_new(&self.identity, owner),
        };
        let req = self.request(Method::POST, "/api/todolist").json(&body);
        self.execute(req).await
    }

    /// Edit a todo. The caller's tenant is always sent as the tenant.
    pub async fn edit_todo(
        &self,
        id: i64,
        title: Option<&str>,
        owner: Option<&str>,
    ) -> CliClientResult<Value> {
        self.precheck(Operation::Update)?;

        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            id: i64,
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            owner: Option<&'a str>,
            tenant_id: &'a str,
        }

        let body = UpdateRequest {
            id,
            title,
            owner,
            tenant_id: &self.identity.tenant_id,
        };
        let req = self
            .request(Method::PATCH, &format!("/api/todolist/{}", id))
            .json(&body);
        self.execute(req).await
    }

    /// Delete a todo
    pub async fn delete_todo(&self, id: i64) -> CliClientResult<Value> {
        self.precheck(Operation::Delete)?;

        let req = self.request(Method::DELETE, &format!("/api/todolist/{}", id));
        self.execute(req).await
    }
}
