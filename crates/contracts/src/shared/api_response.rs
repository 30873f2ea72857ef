use serde::{Deserialize, Serialize};

/// Success body of mutating endpoints, e.g. `DELETE /api/clientes/42/delete`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body the backend attaches to every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
