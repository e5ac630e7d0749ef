use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cliente {
    pub id: u64,
    pub nombre: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct NuevoCliente {
    pub nombre: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Plazo {
    pub id: u64,
    pub meses: u32,
    pub descripcion: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoSolicitud {
    Pendiente,
    Aprobada,
    Rechazada,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Deserialize)]
pub struct NuevaSolicitud {
    #[serde(rename = "clienteID")]
    pub cliente_id: u64,
    #[serde(rename = "montoSolicitado")]
    pub monto_solicitado: f64,
    #[serde(rename = "plazoID")]
    pub plazo_id: u64,
}

#[derive(Deserialize)]
pub struct DecisionSolicitud {
    pub detalles: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prestamo {
    pub id: u64,
    #[serde(rename = "solicitudID")]
    pub solicitud_id: u64,
    #[serde(rename = "clienteID")]
    pub cliente_id: u64,
    pub monto: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pago {
    pub id: u64,
    #[serde(rename = "prestamoID")]
    pub prestamo_id: u64,
    #[serde(rename = "montoPago")]
    pub monto_pago: f64,
    #[serde(rename = "fechaPago")]
    pub fecha_pago: NaiveDate,
}

#[derive(Deserialize)]
pub struct NuevoPago {
    #[serde(rename = "prestamoID")]
    pub prestamo_id: u64,
    #[serde(rename = "montoPago")]
    pub monto_pago: f64,
    #[serde(rename = "fechaPago")]
    pub fecha_pago: NaiveDate,
}

#[derive(Serialize, Deserialize)]
pub struct TotalPagado {
    #[serde(rename = "prestamoID")]
    pub prestamo_id: u64,
    #[serde(rename = "totalPagado")]
    pub total_pagado: f64,
}

#[derive(Serialize, Deserialize)]
pub struct Paginated<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    10
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    clientes: HashMap<u64, Cliente>,
    solicitudes: HashMap<u64, Solicitud>,
    prestamos: HashMap<u64, Prestamo>,
    pagos: HashMap<u64, Pago>,
    plazos: Vec<Plazo>,
}

impl Store {
    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

/// The plazo catalog is read-only; seed it at startup.
fn seeded_store() -> Store {
    Store {
        plazos: vec![
            Plazo { id: 1, meses: 6, descripcion: "6 meses".to_string() },
            Plazo { id: 2, meses: 12, descripcion: "12 meses".to_string() },
            Plazo { id: 3, meses: 24, descripcion: "24 meses".to_string() },
        ],
        ..Store::default()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(seeded_store()));
    Router::new()
        .route("/api/clientes", get(list_clientes).post(create_cliente))
        .route(
            "/api/clientes/id-cliente/{id}",
            get(get_cliente).put(update_cliente).delete(delete_cliente),
        )
        .route("/api/solicitudes", get(list_solicitudes).post(create_solicitud))
        .route("/api/solicitudes/tipos-plazo", get(list_plazos))
        .route("/api/solicitudes/tipos-plazo/{id}", get(get_plazo))
        .route("/api/solicitudes/prestamo-id/{id}", get(get_solicitud))
        .route("/api/solicitudes/prestamo-id/{id}/aprobar", put(aprobar_solicitud))
        .route("/api/solicitudes/prestamo-id/{id}/rechazar", put(rechazar_solicitud))
        .route("/api/prestamos", get(list_prestamos))
        .route("/api/prestamos/prestamo-id/{id}", get(get_prestamo))
        .route("/api/pagos", post(create_pago))
        .route("/api/pagos/prestamo/{id}/pagos", get(list_pagos))
        .route("/api/pagos/prestamo/{id}/total-pagado", get(total_pagado))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Slice `items` (already sorted by id) into the requested page envelope.
fn paginate<T>(items: Vec<T>, query: &PageQuery) -> Paginated<T> {
    let total_elements = items.len() as u64;
    let start = (query.page.max(1) as usize - 1) * query.size as usize;
    let content = items.into_iter().skip(start).take(query.size as usize).collect();
    Paginated {
        content,
        page: query.page,
        size: query.size,
        total_elements,
    }
}

// --- clientes ---

async fn list_clientes(
    State(db): State<Db>,
    Query(query): Query<PageQuery>,
) -> Json<Paginated<Cliente>> {
    let store = db.read().await;
    let mut clientes: Vec<Cliente> = store.clientes.values().cloned().collect();
    clientes.sort_by_key(|c| c.id);
    Json(paginate(clientes, &query))
}

async fn create_cliente(
    State(db): State<Db>,
    Json(input): Json<NuevoCliente>,
) -> (StatusCode, Json<Cliente>) {
    let mut store = db.write().await;
    let cliente = Cliente {
        id: store.alloc_id(),
        nombre: input.nombre,
        direccion: input.direccion,
        telefono: input.telefono,
        email: input.email,
    };
    store.clientes.insert(cliente.id, cliente.clone());
    (StatusCode::CREATED, Json(cliente))
}

async fn get_cliente(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Cliente>, StatusCode> {
    let store = db.read().await;
    store.clientes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_cliente(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<NuevoCliente>,
) -> Result<Json<Cliente>, StatusCode> {
    let mut store = db.write().await;
    let cliente = store.clientes.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    cliente.nombre = input.nombre;
    cliente.direccion = input.direccion;
    cliente.telefono = input.telefono;
    cliente.email = input.email;
    Ok(Json(cliente.clone()))
}

async fn delete_cliente(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .clientes
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- solicitudes ---

async fn list_solicitudes(
    State(db): State<Db>,
    Query(query): Query<PageQuery>,
) -> Json<Paginated<Solicitud>> {
    let store = db.read().await;
    let mut solicitudes: Vec<Solicitud> = store.solicitudes.values().cloned().collect();
    solicitudes.sort_by_key(|s| s.id);
    Json(paginate(solicitudes, &query))
}

async fn create_solicitud(
    State(db): State<Db>,
    Json(input): Json<NuevaSolicitud>,
) -> (StatusCode, Json<Solicitud>) {
    let mut store = db.write().await;
    let solicitud = Solicitud {
        id: store.alloc_id(),
        cliente_id: input.cliente_id,
        monto_solicitado: input.monto_solicitado,
        plazo_id: input.plazo_id,
        estado: EstadoSolicitud::Pendiente,
        detalles: None,
    };
    store.solicitudes.insert(solicitud.id, solicitud.clone());
    (StatusCode::CREATED, Json(solicitud))
}

async fn get_solicitud(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Solicitud>, StatusCode> {
    let store = db.read().await;
    store.solicitudes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Approving a pending solicitud also opens the corresponding prestamo.
/// A solicitud that has already been decided answers 409.
async fn aprobar_solicitud(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<DecisionSolicitud>,
) -> Result<Json<Solicitud>, StatusCode> {
    let mut store = db.write().await;
    let solicitud = store.solicitudes.get(&id).cloned().ok_or(StatusCode::NOT_FOUND)?;
    if solicitud.estado != EstadoSolicitud::Pendiente {
        return Err(StatusCode::CONFLICT);
    }
    let prestamo = Prestamo {
        id: store.alloc_id(),
        solicitud_id: solicitud.id,
        cliente_id: solicitud.cliente_id,
        monto: solicitud.monto_solicitado,
    };
    store.prestamos.insert(prestamo.id, prestamo);
    let solicitud = store.solicitudes.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    solicitud.estado = EstadoSolicitud::Aprobada;
    solicitud.detalles = Some(input.detalles);
    Ok(Json(solicitud.clone()))
}

async fn rechazar_solicitud(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<DecisionSolicitud>,
) -> Result<Json<Solicitud>, StatusCode> {
    let mut store = db.write().await;
    let solicitud = store.solicitudes.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if solicitud.estado != EstadoSolicitud::Pendiente {
        return Err(StatusCode::CONFLICT);
    }
    solicitud.estado = EstadoSolicitud::Rechazada;
    solicitud.detalles = Some(input.detalles);
    Ok(Json(solicitud.clone()))
}

// --- plazos ---

async fn list_plazos(State(db): State<Db>) -> Json<Vec<Plazo>> {
    let store = db.read().await;
    Json(store.plazos.clone())
}

async fn get_plazo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Plazo>, StatusCode> {
    let store = db.read().await;
    store
        .plazos
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- prestamos ---

async fn list_prestamos(
    State(db): State<Db>,
    Query(query): Query<PageQuery>,
) -> Json<Paginated<Prestamo>> {
    let store = db.read().await;
    let mut prestamos: Vec<Prestamo> = store.prestamos.values().cloned().collect();
    prestamos.sort_by_key(|p| p.id);
    Json(paginate(prestamos, &query))
}

async fn get_prestamo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Prestamo>, StatusCode> {
    let store = db.read().await;
    store.prestamos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

// --- pagos ---

async fn create_pago(
    State(db): State<Db>,
    Json(input): Json<NuevoPago>,
) -> Result<(StatusCode, Json<Pago>), StatusCode> {
    let mut store = db.write().await;
    if !store.prestamos.contains_key(&input.prestamo_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let pago = Pago {
        id: store.alloc_id(),
        prestamo_id: input.prestamo_id,
        monto_pago: input.monto_pago,
        fecha_pago: input.fecha_pago,
    };
    store.pagos.insert(pago.id, pago.clone());
    Ok((StatusCode::CREATED, Json(pago)))
}

async fn list_pagos(
    State(db): State<Db>,
    Path(prestamo_id): Path<u64>,
) -> Result<Json<Vec<Pago>>, StatusCode> {
    let store = db.read().await;
    if !store.prestamos.contains_key(&prestamo_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut pagos: Vec<Pago> = store
        .pagos
        .values()
        .filter(|p| p.prestamo_id == prestamo_id)
        .cloned()
        .collect();
    pagos.sort_by_key(|p| p.id);
    Ok(Json(pagos))
}

async fn total_pagado(
    State(db): State<Db>,
    Path(prestamo_id): Path<u64>,
) -> Result<Json<TotalPagado>, StatusCode> {
    let store = db.read().await;
    if !store.prestamos.contains_key(&prestamo_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let total_pagado = store
        .pagos
        .values()
        .filter(|p| p.prestamo_id == prestamo_id)
        .map(|p| p.monto_pago)
        .sum();
    Ok(Json(TotalPagado {
        prestamo_id,
        total_pagado,
    }))
}
