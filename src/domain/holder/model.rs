//! Current-holder domain entity

use chrono::{DateTime, Utc};

/// The user currently holding the workstation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentHolder {
    pub user_id: i32,
    /// Display name (joined for presentation)
    pub user_name: String,
    /// When this user claimed the machine
    pub claimed_at: DateTime<Utc>,
}
