#![allow(dead_code)]

use todo_core::NewTodo;

pub const TENANT_A: &str = "11111111-1111-1111-1111-111111111111";
pub const TENANT_B: &str = "22222222-2222-2222-2222-222222222222";

/// Creates a NewTodo with sensible defaults
pub fn new_todo(title: &str, owner: &str, tenant_id: &str) -> NewTodo {
    NewTodo::new(title, owner, tenant_id)
}

/// The two sample records the service seeds for a demo tenant
pub fn sample_seed(tenant_id: &str, owner: &str) -> Vec<NewTodo> {
    vec![
        new_todo("Pick up groceries", owner, tenant_id),
        new_todo("Finish invoice report", owner, tenant_id),
    ]
}
