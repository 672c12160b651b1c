//! `/api/clientes`

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resources::collection::Collection;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Cliente, ClientePayload, ClienteUpdate, ResourceId};

const CLIENTES: Collection = Collection::new("/api/clientes", "cliente");

/// Customer operations. Bodies are wrapped as `{ "cliente": ... }`.
#[derive(Debug, Clone, Copy)]
pub struct ClientesApi<'a, T = UreqTransport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> ClientesApi<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn list(&self) -> Result<Vec<Cliente>, ApiError> {
        CLIENTES.list(self.api)
    }

    pub fn get(&self, id: impl Into<ResourceId>) -> Result<Cliente, ApiError> {
        CLIENTES.get(self.api, &id.into())
    }

    pub fn create(&self, payload: &ClientePayload) -> Result<Cliente, ApiError> {
        CLIENTES.create(self.api, payload)
    }

    pub fn update(&self, id: impl Into<ResourceId>, payload: &ClienteUpdate) -> Result<Cliente, ApiError> {
        CLIENTES.update(self.api, &id.into(), payload)
    }

    /// Soft delete: `update(id, { activo: false })`.
    pub fn deactivate(&self, id: impl Into<ResourceId>) -> Result<Cliente, ApiError> {
        self.update(id, &ClienteUpdate::deactivate())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn clientes(&self) -> ClientesApi<'_, T> {
        ClientesApi::new(self)
    }
}
