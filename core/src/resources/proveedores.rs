//! `/api/proveedores`

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resources::collection::Collection;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Proveedor, ProveedorPayload, ProveedorUpdate, ResourceId};

const PROVEEDORES: Collection = Collection::new("/api/proveedores", "proveedor");

#[derive(Debug, Clone, Copy)]
pub struct ProveedoresApi<'a, T = UreqTransport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> ProveedoresApi<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn list(&self) -> Result<Vec<Proveedor>, ApiError> {
        PROVEEDORES.list(self.api)
    }

    pub fn get(&self, id: impl Into<ResourceId>) -> Result<Proveedor, ApiError> {
        PROVEEDORES.get(self.api, &id.into())
    }

    pub fn create(&self, payload: &ProveedorPayload) -> Result<Proveedor, ApiError> {
        PROVEEDORES.create(self.api, payload)
    }

    pub fn update(&self, id: impl Into<ResourceId>, payload: &ProveedorUpdate) -> Result<Proveedor, ApiError> {
        PROVEEDORES.update(self.api, &id.into(), payload)
    }

    pub fn deactivate(&self, id: impl Into<ResourceId>) -> Result<Proveedor, ApiError> {
        self.update(id, &ProveedorUpdate::deactivate())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn proveedores(&self) -> ProveedoresApi<'_, T> {
        ProveedoresApi::new(self)
    }
}
