//! Enrutado de la API
//!
//! La tabla de rutas explícita y el dispatcher que la consulta.

pub mod dispatcher;
pub mod route_table;

pub use dispatcher::{DispatchRequest, DispatchResponse, RequestDispatcher};
pub use route_table::{lookup, Endpoint, RouteEntry, RouteMethod, ROUTE_TABLE};
