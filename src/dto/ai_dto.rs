use serde::{Deserialize, Serialize};

// Query string de GET /ai/query
#[derive(Debug, Default, Deserialize)]
pub struct AiQueryParams {
    pub q: Option<String>,
}

// Body de POST /ai/query
#[derive(Debug, Deserialize)]
pub struct AiQueryRequest {
    #[serde(default)]
    pub query: Option<String>,
}

// Response del asistente; `query` es null si el body no la traía
#[derive(Debug, Serialize)]
pub struct AiQueryResponse {
    pub query: Option<String>,
    pub response: &'static str,
    pub suggestions: [&'static str; 4],
    pub timestamp: String,
}
