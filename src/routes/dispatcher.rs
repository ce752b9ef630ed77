//! Dispatcher de peticiones
//!
//! Traduce una `DispatchRequest` (método, ruta sin prefijo, query y body) en
//! una `DispatchResponse` (status y JSON) consultando `ROUTE_TABLE`. Es
//! independiente de axum para poder probarlo sin servidor.

use axum::{
    body::Bytes,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, info_span};
use uuid::Uuid;

use super::route_table::{self, Endpoint};
use crate::controllers::{AssistantController, FleetController, RoiController};
use crate::dto::ai_dto::{AiQueryParams, AiQueryRequest};
use crate::models::RoiInputs;
use crate::repositories::MockFleetStore;
use crate::utils::errors::{internal_error, AppError, AppResult};

/// Petición entrante ya normalizada
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Bytes,
}

impl DispatchRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: HashMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}

/// Respuesta completa: nunca se devuelve un cuerpo parcial
#[derive(Debug, Clone)]
pub struct DispatchResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl DispatchResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }
}

impl From<AppError> for DispatchResponse {
    fn from(err: AppError) -> Self {
        let status = err.status_code();
        let body = serde_json::to_value(err.to_error_response()).unwrap_or_else(|_| {
            serde_json::json!({ "error": "Internal server error" })
        });
        Self { status, body }
    }
}

impl IntoResponse for DispatchResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Clone)]
pub struct RequestDispatcher {
    fleet: FleetController,
}

impl RequestDispatcher {
    pub fn new(store: Arc<MockFleetStore>) -> Self {
        Self {
            fleet: FleetController::new(store),
        }
    }

    /// Atender una petición con el generador aleatorio del hilo
    pub fn handle(&self, request: DispatchRequest) -> DispatchResponse {
        let mut rng = rand::thread_rng();
        self.handle_with_rng(request, &mut rng)
    }

    pub fn handle_with_rng<R: Rng>(
        &self,
        request: DispatchRequest,
        rng: &mut R,
    ) -> DispatchResponse {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "dispatch",
            %request_id,
            method = %request.method,
            path = %request.path
        );
        let _guard = span.enter();

        let response = match self.route(&request, rng) {
            Ok(body) => DispatchResponse::ok(body),
            Err(e) => DispatchResponse::from(e),
        };

        info!(
            "📨 {} {} -> {}",
            request.method,
            request.path,
            response.status.as_u16()
        );
        response
    }

    fn route<R: Rng>(&self, request: &DispatchRequest, rng: &mut R) -> AppResult<Value> {
        // El body de un POST se parsea antes de buscar la ruta
        let body = if request.method == Method::POST {
            Some(serde_json::from_slice::<Value>(&request.body)?)
        } else {
            None
        };

        let endpoint = route_table::lookup(&request.method, &request.path)
            .ok_or_else(|| AppError::not_found(&request.path))?;
        debug!("🧭 Endpoint resuelto: {:?}", endpoint);

        let fleet = &self.fleet;

        match endpoint {
            Endpoint::Status => to_json(&fleet.status()),
            Endpoint::FleetOverview => to_json(&fleet.overview(rng)),
            Endpoint::FleetVehicles => to_json(&fleet.vehicles(rng)),
            Endpoint::FleetDrivers => to_json(&fleet.drivers()),
            Endpoint::FleetRoutes => to_json(&fleet.routes()),
            Endpoint::FleetCompliance => to_json(fleet.compliance()),
            Endpoint::FleetAnalytics => to_json(&fleet.analytics()),
            Endpoint::AiQueryGet => {
                let params = AiQueryParams {
                    q: request.query.get("q").cloned(),
                };
                to_json(&AssistantController.query_get(params))
            }
            Endpoint::AiQueryPost => {
                let payload: AiQueryRequest =
                    serde_json::from_value(body.unwrap_or(Value::Null))?;
                to_json(&AssistantController.query_post(payload))
            }
            Endpoint::CalculateRoi => {
                let inputs: RoiInputs = serde_json::from_value(body.unwrap_or(Value::Null))?;
                to_json(&RoiController.calculate(inputs)?)
            }
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| internal_error(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn dispatcher() -> RequestDispatcher {
        RequestDispatcher::new(Arc::new(MockFleetStore::builtin()))
    }

    fn post(path: &str, body: Value) -> DispatchRequest {
        DispatchRequest::new(Method::POST, path).with_body(body.to_string())
    }

    #[test]
    fn test_status_payload() {
        let response = dispatcher().handle(DispatchRequest::new(Method::GET, "/"));
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["message"], "FleetPulse API is running!");
        assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
        assert!(response.body["timestamp"].is_string());
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let response = dispatcher().handle(DispatchRequest::new(Method::GET, "/fleet/unknown"));
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(
            response.body,
            json!({ "error": "Endpoint not found", "path": "/fleet/unknown" })
        );
    }

    #[test]
    fn test_wrong_method_is_not_found() {
        let response = dispatcher().handle(post("/fleet/drivers", json!({})));
        assert_eq!(response.status, StatusCode::NOT_FOUND);

        let response = dispatcher().handle(DispatchRequest::new(Method::PUT, "/fleet/drivers"));
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_malformed_post_body_wins_over_not_found() {
        let request = DispatchRequest::new(Method::POST, "/nowhere").with_body("{oops");
        let response = dispatcher().handle(request);
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body["error"], "Internal server error");
    }

    #[test]
    fn test_empty_post_body_is_internal_error() {
        let response = dispatcher().handle(DispatchRequest::new(Method::POST, "/calculate-roi"));
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body["message"].is_string());
        assert!(response.body["timestamp"].is_string());
    }

    #[test]
    fn test_roi_reference_projection() {
        let response = dispatcher().handle(post(
            "/calculate-roi",
            json!({ "trucks": 15, "monthlyFuelCost": 250000, "accidentsPerYear": 3 }),
        ));
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["monthlySavings"], 162500);
        assert_eq!(response.body["annualSavings"], 1950000);
        assert_eq!(response.body["netSavings"], 1824000);
        assert_eq!(response.body["roi"], 1448);
        assert_eq!(
            response.body["breakdown"],
            json!({
                "fuelSavings": 37500,
                "accidentSavings": 5000,
                "maintenanceSavings": 120000,
                "totalCost": 126000
            })
        );
    }

    #[test]
    fn test_roi_zero_trucks_is_bad_request() {
        let response = dispatcher().handle(post(
            "/calculate-roi",
            json!({ "trucks": 0, "monthlyFuelCost": 250000, "accidentsPerYear": 3 }),
        ));
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "Validation error");
    }

    #[test]
    fn test_roi_missing_field_is_internal_error() {
        let response = dispatcher().handle(post("/calculate-roi", json!({ "trucks": 4 })));
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_ai_get_echoes_query() {
        let request = DispatchRequest::new(Method::GET, "/ai/query").with_query("q", "Fuel usage");
        let response = dispatcher().handle(request);
        assert_eq!(response.body["query"], "Fuel usage");
        assert!(response.body["response"]
            .as_str()
            .unwrap()
            .starts_with("Your fleet's current fuel efficiency"));
        assert_eq!(response.body["suggestions"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_ai_get_without_query_echoes_empty_string() {
        let response = dispatcher().handle(DispatchRequest::new(Method::GET, "/ai/query"));
        assert_eq!(response.body["query"], "");
        assert!(response.body["response"]
            .as_str()
            .unwrap()
            .starts_with("I'm a demo AI assistant."));
    }

    #[test]
    fn test_ai_post_without_query_echoes_null() {
        let response = dispatcher().handle(post("/ai/query", json!({})));
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body["query"].is_null());
        assert!(response.body["response"]
            .as_str()
            .unwrap()
            .starts_with("I'm a demo AI assistant for FleetPulse."));
    }

    #[test]
    fn test_ai_post_cost_bank() {
        let response = dispatcher().handle(post("/ai/query", json!({ "query": "Any Savings?" })));
        assert!(response.body["response"]
            .as_str()
            .unwrap()
            .starts_with("Cost Savings Summary:"));
        assert_eq!(response.body["suggestions"][0], "Show me fuel efficiency trends");
    }

    #[test]
    fn test_seeded_rng_makes_overview_reproducible() {
        let dispatcher = dispatcher();
        let mut a = StdRng::seed_from_u64(21);
        let mut b = StdRng::seed_from_u64(21);
        let request = DispatchRequest::new(Method::GET, "/fleet/overview");
        let first = dispatcher.handle_with_rng(request.clone(), &mut a);
        let second = dispatcher.handle_with_rng(request, &mut b);
        assert_eq!(first.body["analytics"], second.body["analytics"]);
    }

    #[test]
    fn test_overview_keeps_stored_vehicles() {
        let store = Arc::new(MockFleetStore::builtin());
        let dispatcher = RequestDispatcher::new(store.clone());
        let response = dispatcher.handle(DispatchRequest::new(Method::GET, "/fleet/overview"));
        let expected = serde_json::to_value(store.vehicles()).unwrap();
        assert_eq!(response.body["vehicles"], expected);
        assert!(response.body["analytics"]["activeVehicles"].as_u64().unwrap() <= 28);
    }

    #[test]
    fn test_analytics_flattens_metrics_with_series() {
        let response = dispatcher().handle(DispatchRequest::new(Method::GET, "/fleet/analytics"));
        assert_eq!(response.body["totalVehicles"], 28);
        assert_eq!(response.body["fuelEfficiency"], 6.2);
        assert_eq!(
            response.body["timeSeries"]["safetyScores"][0],
            json!({ "date": "2025-01-01", "value": 89 })
        );
        assert_eq!(
            response.body["timeSeries"]["costSavings"]["breakdown"],
            json!({ "fuel": 28500, "maintenance": 12000, "insurance": 7000 })
        );
        assert!(response.body["lastUpdated"].is_string());
    }
}
