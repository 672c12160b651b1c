//! Typed blocking client for the production-management backend.
//!
//! # Overview
//! Exposes the backend's REST resources (clientes, proveedores, productos,
//! materias primas, compras de materia prima, pedidos, producciones and
//! controles de calidad) as typed wrapper methods over one shared request
//! function.
//!
//! # Design
//! - `ApiClient` is built once and passed to every wrapper; it holds the
//!   configuration, a `Transport` and the request/error hooks, nothing else.
//! - Requests are plain data (`HttpRequest`) until the transport runs them,
//!   so each wrapper operation can be checked without a server.
//! - `ApiClient::request` returns the parsed response body; non-2xx statuses
//!   and transport failures come back as `ApiError` with no retry.
//!
//! ```no_run
//! use erp_client::{ApiClient, ClientePayload};
//!
//! let api = ApiClient::from_env()?;
//! let acme = api.clientes().create(&ClientePayload {
//!     nombre: "Acme".to_string(),
//!     ..ClientePayload::default()
//! })?;
//! api.clientes().deactivate(acme.id)?;
//! # Ok::<(), erp_client::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod hooks;
pub mod http;
pub mod resources;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use envelope::Envelope;
pub use error::ApiError;
pub use hooks::{NoopHook, RequestHook, ResponseErrorHook};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use resources::{
    ClientesApi, ComprasMateriaPrimaApi, MateriasPrimasApi, PedidosApi, ProduccionesApi, ProductosApi,
    ProveedoresApi,
};
pub use transport::{Transport, UreqTransport};
pub use types::*;
