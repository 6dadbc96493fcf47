//! Current-holder API DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::holder::CurrentHolder;

/// Request to record who is at the workstation now
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClaimWorkstationRequest {
    /// Id of the member taking over
    #[validate(range(min = 1))]
    pub user_id: i32,
}

/// The member currently at the workstation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrentHolderDto {
    pub user_id: i32,
    pub user_name: String,
    /// RFC 3339 timestamp of the claim
    pub claimed_at: String,
}

impl From<CurrentHolder> for CurrentHolderDto {
    fn from(h: CurrentHolder) -> Self {
        Self {
            user_id: h.user_id,
            user_name: h.user_name,
            claimed_at: h.claimed_at.to_rfc3339(),
        }
    }
}
