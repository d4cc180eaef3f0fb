pub mod access_evaluator;
pub mod claims;
pub mod decision;
pub mod error;
pub mod identity_context;
pub mod jwt_validator;
pub mod operation;
pub mod policy;
pub mod visibility;

pub use access_evaluator::AccessEvaluator;
pub use claims::Claims;
pub use decision::{Decision, DenyReason};
pub use error::{AuthError, Result};
pub use identity_context::IdentityContext;
pub use jwt_validator::JwtValidator;
pub use operation::Operation;
pub use policy::Policy;
pub use visibility::Visibility;

#[cfg(test)]
mod tests;
