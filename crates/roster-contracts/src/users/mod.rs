//! User contracts
//!
//! - base: the per-field constraint tables
//! - create: all fields required
//! - update: all fields optional (partial update)

mod base;
mod create;
mod update;

pub use base::{UserBaseContract, UserFields, CREATE_RULES, UPDATE_RULES};
pub use create::CreateUserContract;
pub use update::UpdateUserContract;
