use crate::dto::ai_dto::{AiQueryParams, AiQueryRequest, AiQueryResponse};
use crate::services::AssistantBank;
use crate::utils::time::now_iso;

pub struct AssistantController;

impl AssistantController {
    /// GET /ai/query?q=...; sin `q` se responde a la consulta vacía
    pub fn query_get(&self, params: AiQueryParams) -> AiQueryResponse {
        let query = params.q.unwrap_or_default();
        self.respond(AssistantBank::Get, Some(query))
    }

    /// POST /ai/query con body `{ "query": ... }`
    pub fn query_post(&self, request: AiQueryRequest) -> AiQueryResponse {
        self.respond(AssistantBank::Post, request.query)
    }

    fn respond(&self, bank: AssistantBank, query: Option<String>) -> AiQueryResponse {
        let response = bank.answer(query.as_deref().unwrap_or(""));
        AiQueryResponse {
            query,
            response,
            suggestions: bank.suggestions(),
            timestamp: now_iso(),
        }
    }
}
