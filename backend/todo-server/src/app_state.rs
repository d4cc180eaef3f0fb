use crate::Metrics;

use todo_auth::{AccessEvaluator, JwtValidator};
use todo_config::ValidationConfig;
use todo_store::TodoStore;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
    pub evaluator: AccessEvaluator,
    pub jwt_validator: Arc<JwtValidator>,
    pub metrics: Metrics,
    /// `None` when no Prometheus recorder is installed
    pub prometheus: Option<PrometheusHandle>,
    pub validation: ValidationConfig,
}
