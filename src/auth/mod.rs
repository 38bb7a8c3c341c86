pub mod engine;
pub mod graph;
mod policy;
pub mod principal;
pub mod scope;
pub mod session;
pub mod types;

pub use engine::PermissionEngine;
pub use principal::{Principal, Role, resolve_principal};
pub use scope::ScopeFilter;
pub use types::{Action, DenyReason, EntityKind, TargetRef, Verdict};
