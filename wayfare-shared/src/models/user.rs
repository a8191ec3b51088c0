use serde::{Deserialize, Serialize};

use crate::pii::Masked;

/// A signed-in traveler account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Masked<String>,
}

impl User {
    pub fn new(id: String, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email: Masked(email),
        }
    }
}
