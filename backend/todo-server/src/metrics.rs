use todo_auth::{DenyReason, Operation};

use metrics::counter;

/// Metrics collector for the todo API
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "todo_api" }
    }

    /// Record a request for an operation, before any access check
    pub fn request(&self, operation: Operation) {
        counter!(format!("{}.requests", self.prefix)).increment(1);
        counter!(format!("{}.requests.{}", self.prefix, operation)).increment(1);
    }

    /// Record a request rejected by access control
    pub fn denied(&self, reason: &DenyReason) {
        self.denied_with_label(reason.label());
    }

    /// Record a request without a usable identity
    pub fn unauthenticated(&self) {
        self.denied_with_label("unauthenticated");
    }

    fn denied_with_label(&self, label: &str) {
        counter!(format!("{}.denied", self.prefix)).increment(1);
        counter!(format!("{}.denied.{}", self.prefix, label)).increment(1);
    }

    pub fn todo_created(&self) {
        counter!(format!("{}.todos.created", self.prefix)).increment(1);
    }

    pub fn todo_updated(&self) {
        counter!(format!("{}.todos.updated", self.prefix)).increment(1);
    }

    pub fn todo_deleted(&self) {
        counter!(format!("{}.todos.deleted", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
