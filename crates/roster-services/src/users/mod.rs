//! User services
//!
//! One service per operation:
//! - create: validate and insert
//! - find: fetch one by id, or list with an optional role filter
//! - update: validate, then apply a partial update
//! - delete: delete one (returning its snapshot) or delete all

mod create;
mod delete;
mod find;
mod update;

pub use create::CreateUserService;
pub use delete::{DeleteOutcome, DeleteUserService};
pub use find::{FindUsersService, UserLookup};
pub use update::{UpdateUserParams, UpdateUserService};

use roster_core::traits::Entity;
use roster_models::User;

/// Entity name used in not-found errors
pub const USER_ENTITY: &str = User::TYPE_NAME;
