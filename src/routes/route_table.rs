//! Tabla de rutas de la API
//!
//! Cada entrada asocia un método y una ruta exacta (sin prefijo) con un
//! `Endpoint`. No hay parámetros de ruta ni comodines.

use http::Method;

/// Endpoints expuestos por la API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Status,
    FleetOverview,
    FleetVehicles,
    FleetDrivers,
    FleetRoutes,
    FleetCompliance,
    FleetAnalytics,
    AiQueryGet,
    AiQueryPost,
    CalculateRoi,
}

impl Endpoint {
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Status,
        Endpoint::FleetOverview,
        Endpoint::FleetVehicles,
        Endpoint::FleetDrivers,
        Endpoint::FleetRoutes,
        Endpoint::FleetCompliance,
        Endpoint::FleetAnalytics,
        Endpoint::AiQueryGet,
        Endpoint::AiQueryPost,
        Endpoint::CalculateRoi,
    ];
}

/// Métodos soportados por la tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
}

impl RouteMethod {
    pub fn matches(&self, method: &Method) -> bool {
        match self {
            RouteMethod::Get => *method == Method::GET,
            RouteMethod::Post => *method == Method::POST,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub method: RouteMethod,
    pub path: &'static str,
    pub endpoint: Endpoint,
}

const fn entry(method: RouteMethod, path: &'static str, endpoint: Endpoint) -> RouteEntry {
    RouteEntry {
        method,
        path,
        endpoint,
    }
}

pub const ROUTE_TABLE: &[RouteEntry] = &[
    entry(RouteMethod::Get, "/", Endpoint::Status),
    entry(RouteMethod::Get, "/fleet/overview", Endpoint::FleetOverview),
    entry(RouteMethod::Get, "/fleet/vehicles", Endpoint::FleetVehicles),
    entry(RouteMethod::Get, "/fleet/drivers", Endpoint::FleetDrivers),
    entry(RouteMethod::Get, "/fleet/routes", Endpoint::FleetRoutes),
    entry(RouteMethod::Get, "/fleet/compliance", Endpoint::FleetCompliance),
    entry(RouteMethod::Get, "/fleet/analytics", Endpoint::FleetAnalytics),
    entry(RouteMethod::Get, "/ai/query", Endpoint::AiQueryGet),
    entry(RouteMethod::Post, "/ai/query", Endpoint::AiQueryPost),
    entry(RouteMethod::Post, "/calculate-roi", Endpoint::CalculateRoi),
];

/// Buscar el endpoint para un método y una ruta ya sin prefijo
pub fn lookup(method: &Method, path: &str) -> Option<Endpoint> {
    ROUTE_TABLE
        .iter()
        .find(|route| route.path == path && route.method.matches(method))
        .map(|route| route.endpoint)
}
