//! API client core for the loan management backend.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `LoanClient` holds only the shared configuration: base URL and the
//!   default JSON content-type header, read-only after construction.
//! - Each backend operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), grouped per resource under `services`.
//! - `router` carries the UI's declarative route table and path matcher;
//!   like the rest of the core it is pure data plus functions.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod router;
pub mod services;
pub mod types;

pub use client::{LoanClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use router::{match_path, Route, RouteMatch, ROUTES};
pub use types::{
    Cliente, DecisionSolicitud, EstadoSolicitud, NuevaSolicitud, NuevoCliente, NuevoPago,
    Paginated, Pagination, Pago, Plazo, Prestamo, Solicitud, TotalPagado,
};
