//! Per-resource service operations, one module per backend resource.
//!
//! Each module extends [`crate::client::LoanClient`] with `build_*`/`parse_*`
//! pairs for its resource. Paths and payload shapes follow the backend
//! contract; no transformation happens beyond path/query templating and JSON
//! (de)serialization.

pub mod clientes;
pub mod plazos;
pub mod prestamos;
pub mod solicitudes;
