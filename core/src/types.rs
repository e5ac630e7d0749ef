//! Domain DTOs for the loan management API.
//!
//! # Design
//! These types mirror the backend's JSON contract but are defined
//! independently from the mock-server crate; integration tests catch any
//! schema drift between the two. Field names on the wire follow the backend's
//! Spanish camelCase convention (`clienteID`, `montoSolicitado`, ...), mapped
//! to snake_case on the Rust side via serde renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A borrower/customer entity returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cliente {
    pub id: u64,
    pub nombre: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

/// Request payload for creating a new cliente. Also used as the PUT body when
/// editing: the backend replaces the stored fields wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuevoCliente {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A loan term/duration option from the read-only catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plazo {
    pub id: u64,
    pub meses: u32,
    pub descripcion: String,
}

/// Lifecycle state of a solicitud, decided server-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoSolicitud {
    Pendiente,
    Aprobada,
    Rechazada,
}

/// A loan request awaiting approval or rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Solicitud {
    pub id: u64,
    #[serde(rename = "clienteID")]
    pub cliente_id: u64,
    #[serde(rename = "montoSolicitado")]
    pub monto_solicitado: f64,
    #[serde(rename = "plazoID")]
    pub plazo_id: u64,
    pub estado: EstadoSolicitud,
    pub detalles: Option<String>,
}

/// Request payload for creating a new solicitud.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuevaSolicitud {
    #[serde(rename = "clienteID")]
    pub cliente_id: u64,
    #[serde(rename = "montoSolicitado")]
    pub monto_solicitado: f64,
    #[serde(rename = "plazoID")]
    pub plazo_id: u64,
}

/// Body of the aprobar/rechazar operations: free-text detail recorded with
/// the decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionSolicitud {
    pub detalles: String,
}

/// An approved, active loan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prestamo {
    pub id: u64,
    #[serde(rename = "solicitudID")]
    pub solicitud_id: u64,
    #[serde(rename = "clienteID")]
    pub cliente_id: u64,
    pub monto: f64,
}

/// A payment applied against a loan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pago {
    pub id: u64,
    #[serde(rename = "prestamoID")]
    pub prestamo_id: u64,
    #[serde(rename = "montoPago")]
    pub monto_pago: f64,
    #[serde(rename = "fechaPago")]
    pub fecha_pago: NaiveDate,
}

/// Request payload for registering a payment. The loan association travels
/// inside the payload; `POST /api/pagos` carries no id in the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuevoPago {
    #[serde(rename = "prestamoID")]
    pub prestamo_id: u64,
    #[serde(rename = "montoPago")]
    pub monto_pago: f64,
    #[serde(rename = "fechaPago")]
    pub fecha_pago: NaiveDate,
}

/// Aggregate returned by the total-pagado endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TotalPagado {
    #[serde(rename = "prestamoID")]
    pub prestamo_id: u64,
    #[serde(rename = "totalPagado")]
    pub total_pagado: f64,
}

/// Query parameters for collection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

/// Page envelope wrapping every paginated collection response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
}
