//! Person wire types

use serde::{Deserialize, Serialize};

/// Request body for creating or replacing a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub name: String,
    pub email: String,
}

/// A stored person as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub email: String,
}
