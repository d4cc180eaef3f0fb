//! Todo list REST API handlers
//!
//! Every handler extracts the caller's identity, asks the access evaluator,
//! and only then reads the request body or touches the store. All store access is scoped to the
//! caller's tenant.

use crate::{
    ApiError, ApiResult, AppState, CreateTodoRequest, DeleteResponse, Identity, TodoDto,
    TodoListResponse, TodoResponse, UpdateTodoRequest,
};

use todo_auth::{IdentityContext, Operation};
use todo_core::{NewTodo, Todo};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use error_location::ErrorLocation;
use log::{debug, info, warn};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/todolist
///
/// Admins see every todo in their tenant, everyone else only their own.
pub async fn list_todos(
    State(state): State<AppState>,
    Identity(identity): Identity,
) -> ApiResult<Json<TodoListResponse>> {
    authorize(&state, &identity, Operation::List, None)?;

    let todos = state.store.list(&identity.tenant_id).await;
    let visible = state.evaluator.visible_todos(&identity, todos);

    debug!("{} listed {} todo(s)", identity.log_prefix(), visible.len());

    Ok(Json(TodoListResponse {
        todos: visible.into_iter().map(TodoDto::from).collect(),
    }))
}

/// GET /api/todolist/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoResponse>> {
    authorize(&state, &identity, Operation::ReadOne, None)?;
    let todo_id = parse_id(&id)?;

    let todo = state.store.get(todo_id, &identity.tenant_id).await?;
    authorize(&state, &identity, Operation::ReadOne, Some(&todo))?;

    Ok(Json(TodoResponse { todo: todo.into() }))
}

/// POST /api/todolist
///
/// The new todo always lands in the caller's tenant. Only admins may name an
/// owner other than themselves.
pub async fn create_todo(
    State(state): State<AppState>,
    Identity(identity): Identity,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> ApiResult<Json<TodoResponse>> {
    authorize(&state, &identity, Operation::Create, None)?;
    let Json(req) = body?;

    let title = Todo::normalize_title(&req.title, state.validation.max_title_length)?;
    let owner = state
        .evaluator
        .owner_for_new(&identity, req.owner.as_deref());

    let todo = state
        .store
        .create(NewTodo::new(title, owner, identity.tenant_id.clone()))
        .await;

    state.metrics.todo_created();
    info!(
        "{} created todo {} owned by {}",
        identity.log_prefix(),
        todo.id,
        todo.owner
    );

    Ok(Json(TodoResponse { todo: todo.into() }))
}

/// PATCH /api/todolist/{id}
///
/// Partial update. The stored record keeps the path id and the caller's
/// tenant whatever the payload says.
pub async fn update_todo(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> ApiResult<Json<TodoResponse>> {
    authorize(&state, &identity, Operation::Update, None)?;
    let todo_id = parse_id(&id)?;
    let Json(req) = body?;

    if let Some(body_id) = req.id
        && body_id != todo_id
    {
        warn!(
            "{} update of todo {} carried mismatched id {}",
            identity.log_prefix(),
            todo_id,
            body_id
        );
        return Err(ApiError::todo_not_found(todo_id));
    }

    if let Some(ref tenant_id) = req.tenant_id
        && *tenant_id != identity.tenant_id
    {
        warn!(
            "{} ignoring tenant_id '{}' in update of todo {}",
            identity.log_prefix(),
            tenant_id,
            todo_id
        );
    }

    let existing = state.store.get(todo_id, &identity.tenant_id).await?;
    authorize(&state, &identity, Operation::Update, Some(&existing))?;

    let title = match req.title {
        Some(ref raw) => Todo::normalize_title(raw, state.validation.max_title_length)?,
        None => existing.title.clone(),
    };
    let owner = match req.owner {
        Some(ref raw) => normalize_owner(raw)?,
        None => existing.owner.clone(),
    };

    let updated = state
        .store
        .replace(
            todo_id,
            Todo {
                id: todo_id,
                title,
                owner,
                tenant_id: identity.tenant_id.clone(),
            },
            &identity.tenant_id,
        )
        .await?;

    state.metrics.todo_updated();
    info!("{} updated todo {}", identity.log_prefix(), updated.id);

    Ok(Json(TodoResponse {
        todo: updated.into(),
    }))
}

/// DELETE /api/todolist/{id}
///
/// Idempotent. Ids that are absent or belong to another tenant leave the
/// store untouched and still answer with the requested id.
pub async fn delete_todo(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    authorize(&state, &identity, Operation::Delete, None)?;
    let todo_id = parse_id(&id)?;

    if state
        .store
        .delete_in_tenant(todo_id, &identity.tenant_id)
        .await
    {
        state.metrics.todo_deleted();
        info!("{} deleted todo {}", identity.log_prefix(), todo_id);
    } else {
        debug!(
            "{} delete of todo {} was a no-op",
            identity.log_prefix(),
            todo_id
        );
    }

    Ok(Json(DeleteResponse {
        deleted_id: todo_id,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Run the access check, recording the request and any denial.
///
/// Without a target only role and scope are checked; with one the record must
/// also be reachable by the caller.
fn authorize(
    state: &AppState,
    identity: &IdentityContext,
    operation: Operation,
    target: Option<&Todo>,
) -> ApiResult<()> {
    if target.is_none() {
        state.metrics.request(operation);
    }

    state
        .evaluator
        .evaluate(identity, operation, target)
        .into_result()
        .map_err(|reason| {
            warn!(
                "{} denied {}: {}",
                identity.log_prefix(),
                operation,
                reason
            );
            state.metrics.denied(&reason);
            ApiError::from(reason)
        })?;

    if operation.is_mutation() {
        debug!("{} allowed {}", identity.log_prefix(), operation);
    }

    Ok(())
}

#[track_caller]
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::Validation {
        message: format!("Invalid todo id: {}", raw),
        field: Some("id".into()),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn normalize_owner(raw: &str) -> ApiResult<String> {
    let owner = raw.trim();
    if owner.is_empty() {
        return Err(ApiError::Validation {
            message: "owner cannot be empty".to_string(),
            field: Some("owner".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(owner.to_string())
}
