//! Access control for the todo list.
//!
//! Every check runs in the same order: role policy, then scope, then the
//! target record (tenant, and for listing, ownership). Role and scope are
//! independently required; holding one never compensates for the other.

use crate::{Decision, DenyReason, IdentityContext, Operation, Policy, Visibility};

use todo_core::{TODO_READ, TODO_WRITE, Todo};

/// Central policy decision point for todo operations
#[derive(Debug, Clone, Copy)]
pub struct AccessEvaluator {
    delete_requires_write_scope: bool,
}

impl Default for AccessEvaluator {
    fn default() -> Self {
        Self {
            delete_requires_write_scope: true,
        }
    }
}

impl AccessEvaluator {
    pub fn new(delete_requires_write_scope: bool) -> Self {
        Self {
            delete_requires_write_scope,
        }
    }

    /// Role policy and scope (if any) an operation requires
    pub fn requirements(&self, operation: Operation) -> (Policy, Option<&'static str>) {
        match operation {
            Operation::List | Operation::ReadOne => (Policy::Readers, Some(TODO_READ)),
            Operation::Create | Operation::Update => (Policy::Writers, Some(TODO_WRITE)),
            Operation::Delete => (
                Policy::Writers,
                self.delete_requires_write_scope.then_some(TODO_WRITE),
            ),
        }
    }

    /// Decide whether the caller may perform `operation`.
    ///
    /// With a `target`, the record must also be reachable by the caller: in
    /// the caller's tenant, and for `List` inside the caller's visible set.
    /// Unreachable targets are denied as `NotFound`.
    pub fn evaluate(
        &self,
        identity: &IdentityContext,
        operation: Operation,
        target: Option<&Todo>,
    ) -> Decision {
        let (policy, scope) = self.requirements(operation);

        if !policy.is_satisfied_by(identity) {
            return Decision::Deny(DenyReason::MissingRole(policy));
        }

        if let Some(scope) = scope
            && !identity.has_scope(scope)
        {
            return Decision::Deny(DenyReason::MissingScope(scope));
        }

        match target {
            Some(todo) if operation == Operation::List => {
                if self.visibility(identity).admits(todo) {
                    Decision::Allow
                } else {
                    Decision::Deny(DenyReason::NotFound)
                }
            }
            Some(todo) if !todo.belongs_to(&identity.tenant_id) => {
                Decision::Deny(DenyReason::NotFound)
            }
            _ => Decision::Allow,
        }
    }

    /// Role and scope check only
    pub fn authorize(&self, identity: &IdentityContext, operation: Operation) -> Decision {
        self.evaluate(identity, operation, None)
    }

    /// Which todos the caller may list. Admins see their whole tenant,
    /// everyone else only what they own.
    pub fn visibility(&self, identity: &IdentityContext) -> Visibility {
        if identity.is_admin() {
            Visibility::Tenant {
                tenant_id: identity.tenant_id.clone(),
            }
        } else {
            Visibility::Owner {
                tenant_id: identity.tenant_id.clone(),
                username: identity.username.clone(),
            }
        }
    }

    /// Filter `todos` down to the caller's visible set
    pub fn visible_todos(&self, identity: &IdentityContext, todos: Vec<Todo>) -> Vec<Todo> {
        todos
            .into_iter()
            .filter(|todo| {
                self.evaluate(identity, Operation::List, Some(todo))
                    .is_allowed()
            })
            .collect()
    }

    /// Owner for a todo the caller is creating. Only admins may name someone
    /// else; a blank request falls back to the caller.
    pub fn owner_for_new(&self, identity: &IdentityContext, requested: Option<&str>) -> String {
        match requested.map(str::trim) {
            Some(owner) if identity.is_admin() && !owner.is_empty() => owner.to_string(),
            _ => identity.username.clone(),
        }
    }
}
