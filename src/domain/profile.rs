use serde::{Deserialize, Serialize};

/// The signed-in user's profile card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub avatar_url: String,
}
