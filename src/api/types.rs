use serde::{Deserialize, Serialize};

/// Request body for `POST /api/ask`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Response body from `POST /api/ask`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AskResponse {
    pub answer: String,
}
