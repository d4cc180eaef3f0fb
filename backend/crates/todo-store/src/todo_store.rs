use crate::{Result as StoreErrorResult, StoreError};

use todo_core::{NewTodo, Todo};

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info};
use tokio::sync::RwLock;

/// In-memory todo store shared by all requests.
///
/// Records from every tenant live in one map keyed by id; each operation
/// filters by tenant. Mutations hold the write lock for their whole duration,
/// so id assignment cannot race and readers never see a half-applied write.
#[derive(Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<BTreeMap<i64, Todo>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert startup records in order. Ids are assigned as for `create`.
    pub async fn seed(&self, todos: impl IntoIterator<Item = NewTodo>) -> Vec<Todo> {
        let mut inner = self.inner.write().await;

        let seeded: Vec<Todo> = todos
            .into_iter()
            .map(|new_todo| Self::insert(&mut inner, new_todo))
            .collect();

        info!("Seeded {} todo(s)", seeded.len());
        seeded
    }

    /// All todos of a tenant, ordered by id
    pub async fn list(&self, tenant_id: &str) -> Vec<Todo> {
        let inner = self.inner.read().await;

        inner
            .values()
            .filter(|todo| todo.belongs_to(tenant_id))
            .cloned()
            .collect()
    }

    /// Find a todo by id within a tenant
    pub async fn get(&self, id: i64, tenant_id: &str) -> StoreErrorResult<Todo> {
        let inner = self.inner.read().await;

        inner
            .get(&id)
            .filter(|todo| todo.belongs_to(tenant_id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Create a todo with the next id (one past the current maximum)
    pub async fn create(&self, new_todo: NewTodo) -> Todo {
        let mut inner = self.inner.write().await;
        Self::insert(&mut inner, new_todo)
    }

    /// Replace the todo `id` in `tenant_id`.
    ///
    /// The stored record always carries `id` and `tenant_id`, whatever the
    /// incoming `todo` says.
    pub async fn replace(&self, id: i64, todo: Todo, tenant_id: &str) -> StoreErrorResult<Todo> {
        let mut inner = self.inner.write().await;

        let existing = inner
            .get_mut(&id)
            .filter(|existing| existing.belongs_to(tenant_id))
            .ok_or_else(|| StoreError::not_found(id))?;

        *existing = Todo {
            id,
            tenant_id: tenant_id.to_string(),
            ..todo
        };

        debug!("Replaced todo {} in tenant {}", id, tenant_id);
        Ok(existing.clone())
    }

    /// Remove a todo regardless of tenant. Absent ids are a no-op.
    pub async fn delete(&self, id: i64) {
        let mut inner = self.inner.write().await;

        if inner.remove(&id).is_some() {
            debug!("Deleted todo {}", id);
        }
    }

    /// Remove a todo only if it belongs to `tenant_id`.
    ///
    /// Returns whether a record was removed. Absent ids and ids owned by
    /// another tenant are a no-op.
    pub async fn delete_in_tenant(&self, id: i64, tenant_id: &str) -> bool {
        let mut inner = self.inner.write().await;

        let in_tenant = inner.get(&id).is_some_and(|todo| todo.belongs_to(tenant_id));
        if in_tenant {
            inner.remove(&id);
            debug!("Deleted todo {} in tenant {}", id, tenant_id);
        }

        in_tenant
    }

    /// Number of todos across all tenants
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    fn insert(inner: &mut BTreeMap<i64, Todo>, new_todo: NewTodo) -> Todo {
        let id = inner.last_key_value().map_or(0, |(id, _)| *id) + 1;
        let todo = new_todo.with_id(id);

        inner.insert(id, todo.clone());
        debug!("Created todo {} in tenant {}", id, todo.tenant_id);
        todo
    }
}
