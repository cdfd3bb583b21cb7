use serde::{Deserialize, Serialize};

/// One dad joke as served by the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    pub category: String,
    pub setup: String,
    pub punchline: String,
}
