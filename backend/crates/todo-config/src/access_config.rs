use crate::DEFAULT_DELETE_REQUIRES_WRITE_SCOPE;

use serde::Deserialize;

/// Access policy switches
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Whether DELETE needs `ToDo.Write` on top of the Writers role
    pub delete_requires_write_scope: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            delete_requires_write_scope: DEFAULT_DELETE_REQUIRES_WRITE_SCOPE,
        }
    }
}
