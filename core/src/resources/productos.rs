//! `/api/productos`

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resources::collection::Collection;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Producto, ProductoPayload, ProductoUpdate, ResourceId};

const PRODUCTOS: Collection = Collection::new("/api/productos", "producto");

#[derive(Debug, Clone, Copy)]
pub struct ProductosApi<'a, T = UreqTransport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> ProductosApi<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn list(&self) -> Result<Vec<Producto>, ApiError> {
        PRODUCTOS.list(self.api)
    }

    pub fn get(&self, id: impl Into<ResourceId>) -> Result<Producto, ApiError> {
        PRODUCTOS.get(self.api, &id.into())
    }

    pub fn create(&self, payload: &ProductoPayload) -> Result<Producto, ApiError> {
        PRODUCTOS.create(self.api, payload)
    }

    pub fn update(&self, id: impl Into<ResourceId>, payload: &ProductoUpdate) -> Result<Producto, ApiError> {
        PRODUCTOS.update(self.api, &id.into(), payload)
    }

    pub fn deactivate(&self, id: impl Into<ResourceId>) -> Result<Producto, ApiError> {
        self.update(id, &ProductoUpdate::deactivate())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn productos(&self) -> ProductosApi<'_, T> {
        ProductosApi::new(self)
    }
}
