//! Prestamo reads under `/api/prestamos` and pago operations under the
//! separate `/api/pagos` resource root.
//!
//! Payments were split out of the prestamo routes backend-side:
//! per-loan reads nest under `/api/pagos/prestamo/{id}/...`, and
//! registration posts to the `/api/pagos` root with the loan association
//! carried inside the payload (`prestamoID`) rather than in the path.

use crate::client::{parse_json, LoanClient};
use crate::error::ApiError;
use crate::http::{with_query, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NuevoPago, Pago, Paginated, Pagination, Prestamo, TotalPagado};

const API_PATH: &str = "/api/prestamos";
const PAGOS_PATH: &str = "/api/pagos";

impl LoanClient {
    /// GET `/api/prestamos?page={page}&size={size}`
    pub fn build_list_prestamos(&self, pagination: Pagination) -> HttpRequest {
        let path = with_query(
            API_PATH,
            &[
                ("page", pagination.page.to_string()),
                ("size", pagination.size.to_string()),
            ],
        );
        self.request(HttpMethod::Get, &path)
    }

    /// GET `/api/prestamos/prestamo-id/{id}`
    pub fn build_get_prestamo(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("{API_PATH}/prestamo-id/{id}"))
    }

    /// GET `/api/pagos/prestamo/{id}/pagos`
    pub fn build_list_pagos(&self, prestamo_id: u64) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            &format!("{PAGOS_PATH}/prestamo/{prestamo_id}/pagos"),
        )
    }

    /// GET `/api/pagos/prestamo/{id}/total-pagado`
    pub fn build_total_pagado(&self, prestamo_id: u64) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            &format!("{PAGOS_PATH}/prestamo/{prestamo_id}/total-pagado"),
        )
    }

    /// POST `/api/pagos` — the body is the payload alone; no loan id appears
    /// in the path.
    pub fn build_create_pago(&self, input: &NuevoPago) -> Result<HttpRequest, ApiError> {
        self.request_with_body(HttpMethod::Post, PAGOS_PATH, input)
    }

    pub fn parse_list_prestamos(
        &self,
        response: HttpResponse,
    ) -> Result<Paginated<Prestamo>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_prestamo(&self, response: HttpResponse) -> Result<Prestamo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_list_pagos(&self, response: HttpResponse) -> Result<Vec<Pago>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_total_pagado(&self, response: HttpResponse) -> Result<TotalPagado, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_pago(&self, response: HttpResponse) -> Result<Pago, ApiError> {
        parse_json(response, 201)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn client() -> LoanClient {
        LoanClient::new("http://localhost:8080")
    }

    #[test]
    fn list_prestamos_defaults_to_page_1_size_10() {
        let req = client().build_list_prestamos(Pagination::default());
        assert_eq!(
            req.path,
            "http://localhost:8080/api/prestamos?page=1&size=10"
        );
    }

    #[test]
    fn get_prestamo_targets_the_prestamo_id_segment() {
        let req = client().build_get_prestamo(7);
        assert_eq!(
            req.path,
            "http://localhost:8080/api/prestamos/prestamo-id/7"
        );
    }

    #[test]
    fn list_pagos_reads_from_the_pagos_root() {
        let req = client().build_list_pagos(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:8080/api/pagos/prestamo/7/pagos"
        );
    }

    #[test]
    fn total_pagado_reads_from_the_pagos_root() {
        let req = client().build_total_pagado(7);
        assert_eq!(
            req.path,
            "http://localhost:8080/api/pagos/prestamo/7/total-pagado"
        );
    }

    // Regression guard: registration must post to the pagos root with the
    // payload alone — the loan id lives inside the body, never in the path.
    #[test]
    fn create_pago_posts_to_the_pagos_root_without_a_path_id() {
        let input = NuevoPago {
            prestamo_id: 7,
            monto_pago: 500.0,
            fecha_pago: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        };
        let req = client().build_create_pago(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/api/pagos");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["prestamoID"], 7);
        assert_eq!(body["montoPago"], 500.0);
        assert_eq!(body["fechaPago"], "2025-03-15");
    }

    #[test]
    fn parse_create_pago_reads_the_created_payment() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":1,"prestamoID":7,"montoPago":500.0,"fechaPago":"2025-03-15"}"#
                .to_string(),
        };
        let pago = client().parse_create_pago(response).unwrap();
        assert_eq!(pago.prestamo_id, 7);
        assert_eq!(pago.fecha_pago, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
    }

    #[test]
    fn parse_total_pagado_reads_the_aggregate() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"prestamoID":7,"totalPagado":1500.0}"#.to_string(),
        };
        let total = client().parse_total_pagado(response).unwrap();
        assert_eq!(total.total_pagado, 1500.0);
    }

    #[test]
    fn parse_list_pagos_unknown_prestamo_is_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_list_pagos(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
