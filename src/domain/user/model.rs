//! User domain entity

/// Team member who can reserve and hold the shared workstation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID
    pub id: i32,
    /// Display name
    pub name: String,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let u = User::new(3, "Member 3");
        assert_eq!(u.id, 3);
        assert_eq!(u.name, "Member 3");
    }
}
