//! Solicitud operations under `/api/solicitudes`.
//!
//! The backend reuses the `prestamo-id` path segment for single-solicitud
//! routes even though the resource is a solicitud; the paths here mirror the
//! backend contract as-is.

use crate::client::{parse_json, LoanClient};
use crate::error::ApiError;
use crate::http::{with_query, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{DecisionSolicitud, NuevaSolicitud, Paginated, Pagination, Solicitud};

const API_PATH: &str = "/api/solicitudes";

impl LoanClient {
    /// POST `/api/solicitudes`
    pub fn build_create_solicitud(&self, input: &NuevaSolicitud) -> Result<HttpRequest, ApiError> {
        self.request_with_body(HttpMethod::Post, API_PATH, input)
    }

    /// GET `/api/solicitudes?page={page}&size={size}`
    pub fn build_list_solicitudes(&self, pagination: Pagination) -> HttpRequest {
        let path = with_query(
            API_PATH,
            &[
                ("page", pagination.page.to_string()),
                ("size", pagination.size.to_string()),
            ],
        );
        self.request(HttpMethod::Get, &path)
    }

    /// GET `/api/solicitudes/prestamo-id/{id}`
    pub fn build_get_solicitud(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("{API_PATH}/prestamo-id/{id}"))
    }

    /// PUT `/api/solicitudes/prestamo-id/{id}/aprobar`
    pub fn build_aprobar_solicitud(
        &self,
        id: u64,
        input: &DecisionSolicitud,
    ) -> Result<HttpRequest, ApiError> {
        self.request_with_body(
            HttpMethod::Put,
            &format!("{API_PATH}/prestamo-id/{id}/aprobar"),
            input,
        )
    }

    /// PUT `/api/solicitudes/prestamo-id/{id}/rechazar`
    pub fn build_rechazar_solicitud(
        &self,
        id: u64,
        input: &DecisionSolicitud,
    ) -> Result<HttpRequest, ApiError> {
        self.request_with_body(
            HttpMethod::Put,
            &format!("{API_PATH}/prestamo-id/{id}/rechazar"),
            input,
        )
    }

    pub fn parse_create_solicitud(&self, response: HttpResponse) -> Result<Solicitud, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_list_solicitudes(
        &self,
        response: HttpResponse,
    ) -> Result<Paginated<Solicitud>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_solicitud(&self, response: HttpResponse) -> Result<Solicitud, ApiError> {
        parse_json(response, 200)
    }

    /// Parses both decision responses: the backend answers aprobar and
    /// rechazar with the updated solicitud.
    pub fn parse_decidir_solicitud(&self, response: HttpResponse) -> Result<Solicitud, ApiError> {
        parse_json(response, 200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EstadoSolicitud;

    fn client() -> LoanClient {
        LoanClient::new("http://localhost:8080")
    }

    #[test]
    fn create_solicitud_posts_the_expected_field_names() {
        let input = NuevaSolicitud {
            cliente_id: 7,
            monto_solicitado: 15000.0,
            plazo_id: 2,
        };
        let req = client().build_create_solicitud(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/api/solicitudes");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["clienteID"], 7);
        assert_eq!(body["montoSolicitado"], 15000.0);
        assert_eq!(body["plazoID"], 2);
    }

    #[test]
    fn list_solicitudes_defaults_to_page_1_size_10() {
        let req = client().build_list_solicitudes(Pagination::default());
        assert_eq!(
            req.path,
            "http://localhost:8080/api/solicitudes?page=1&size=10"
        );
    }

    #[test]
    fn get_solicitud_reuses_the_prestamo_id_segment() {
        let req = client().build_get_solicitud(5);
        assert_eq!(
            req.path,
            "http://localhost:8080/api/solicitudes/prestamo-id/5"
        );
    }

    #[test]
    fn aprobar_puts_detalles_to_the_aprobar_route() {
        let input = DecisionSolicitud {
            detalles: "historial limpio".to_string(),
        };
        let req = client().build_aprobar_solicitud(5, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.path,
            "http://localhost:8080/api/solicitudes/prestamo-id/5/aprobar"
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["detalles"], "historial limpio");
    }

    #[test]
    fn rechazar_puts_detalles_to_the_rechazar_route() {
        let input = DecisionSolicitud {
            detalles: "ingresos insuficientes".to_string(),
        };
        let req = client().build_rechazar_solicitud(5, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.path,
            "http://localhost:8080/api/solicitudes/prestamo-id/5/rechazar"
        );
    }

    #[test]
    fn parse_decidir_solicitud_returns_the_updated_estado() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":5,"clienteID":7,"montoSolicitado":15000.0,"plazoID":2,"estado":"APROBADA","detalles":"historial limpio"}"#.to_string(),
        };
        let solicitud = client().parse_decidir_solicitud(response).unwrap();
        assert_eq!(solicitud.estado, EstadoSolicitud::Aprobada);
        assert_eq!(solicitud.detalles.as_deref(), Some("historial limpio"));
    }

    #[test]
    fn parse_get_solicitud_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_get_solicitud(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
