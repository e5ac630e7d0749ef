//! Cliente CRUD operations under `/api/clientes`.
//!
//! Single-resource paths nest under the fixed `id-cliente` segment, a quirk
//! of the backend contract kept verbatim here.

use crate::client::{check_status, parse_json, LoanClient};
use crate::error::ApiError;
use crate::http::{with_query, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Cliente, NuevoCliente, Paginated, Pagination};

const API_PATH: &str = "/api/clientes";

impl LoanClient {
    /// GET `/api/clientes?page={page}&size={size}`
    pub fn build_list_clientes(&self, pagination: Pagination) -> HttpRequest {
        let path = with_query(
            API_PATH,
            &[
                ("page", pagination.page.to_string()),
                ("size", pagination.size.to_string()),
            ],
        );
        self.request(HttpMethod::Get, &path)
    }

    /// GET `/api/clientes/id-cliente/{id}`
    pub fn build_get_cliente(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("{API_PATH}/id-cliente/{id}"))
    }

    /// POST `/api/clientes`
    pub fn build_create_cliente(&self, input: &NuevoCliente) -> Result<HttpRequest, ApiError> {
        self.request_with_body(HttpMethod::Post, API_PATH, input)
    }

    /// PUT `/api/clientes/id-cliente/{id}`
    pub fn build_update_cliente(
        &self,
        id: u64,
        input: &NuevoCliente,
    ) -> Result<HttpRequest, ApiError> {
        self.request_with_body(HttpMethod::Put, &format!("{API_PATH}/id-cliente/{id}"), input)
    }

    /// DELETE `/api/clientes/id-cliente/{id}`
    pub fn build_delete_cliente(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("{API_PATH}/id-cliente/{id}"))
    }

    pub fn parse_list_clientes(
        &self,
        response: HttpResponse,
    ) -> Result<Paginated<Cliente>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_cliente(&self, response: HttpResponse) -> Result<Cliente, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_cliente(&self, response: HttpResponse) -> Result<Cliente, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_update_cliente(&self, response: HttpResponse) -> Result<Cliente, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_delete_cliente(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}
