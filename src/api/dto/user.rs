//! User API DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::User;

/// A member of the workstation roster
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
        }
    }
}
