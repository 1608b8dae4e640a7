use serde::{Deserialize, Serialize};

/// Professional persona used to scope skills and projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    ProductManager,
    Developer,
    Tester,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::ProductManager, Role::Developer, Role::Tester];

    /// Wire form, as stored in fixtures and used in activity ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ProductManager => "PRODUCT_MANAGER",
            Role::Developer => "DEVELOPER",
            Role::Tester => "TESTER",
        }
    }
}
