//! Plazo catalog reads, nested under `/api/solicitudes/tipos-plazo`.
//!
//! The catalog is read-only; there are no create/update/delete routes.

use crate::client::{parse_json, LoanClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Plazo;

const API_PATH: &str = "/api/solicitudes/tipos-plazo";

impl LoanClient {
    /// GET `/api/solicitudes/tipos-plazo`
    pub fn build_list_plazos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, API_PATH)
    }

    /// GET `/api/solicitudes/tipos-plazo/{id}`
    pub fn build_get_plazo(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("{API_PATH}/{id}"))
    }

    pub fn parse_list_plazos(&self, response: HttpResponse) -> Result<Vec<Plazo>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_plazo(&self, response: HttpResponse) -> Result<Plazo, ApiError> {
        parse_json(response, 200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LoanClient {
        LoanClient::new("http://localhost:8080")
    }

    #[test]
    fn list_plazos_targets_the_tipos_plazo_route() {
        let req = client().build_list_plazos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:8080/api/solicitudes/tipos-plazo"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn get_plazo_appends_the_id() {
        let req = client().build_get_plazo(2);
        assert_eq!(
            req.path,
            "http://localhost:8080/api/solicitudes/tipos-plazo/2"
        );
    }

    #[test]
    fn parse_list_plazos_returns_the_catalog() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"meses":6,"descripcion":"6 meses"},{"id":2,"meses":12,"descripcion":"12 meses"}]"#.to_string(),
        };
        let plazos = client().parse_list_plazos(response).unwrap();
        assert_eq!(plazos.len(), 2);
        assert_eq!(plazos[1].meses, 12);
    }
}
