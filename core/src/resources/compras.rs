//! Raw material purchases (`/api/compras_materia_prima`) and their detail
//! lines.
//!
//! A purchase is created first and its lines are registered afterwards in
//! one bulk POST; the wrapper does not sequence the two calls.

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resources::collection::{parent_query, Collection};
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    CompraMateriaPrima, CompraMateriaPrimaPayload, CompraMateriaPrimaUpdate, DetalleCompra, DetalleCompraItem,
    DetalleCompraUpdate, DetallePrecio, RegistrarDetallesCompra, ResourceId,
};

const COMPRAS: Collection = Collection::new("/api/compras_materia_prima", "compra_materia_prima");
const DETALLES: Collection = Collection::new("/api/detalle_compras", "detalle_compra");

const OBTENER_COMPRAS: &str = "/api/obtener_compras_materia_prima";
const REGISTRAR_DETALLES: &str = "/api/registrar_detalles_compra";
const DETALLES_BY_COMPRA: &str = "/api/obtener_detalles_compra_by_id_compra";

#[derive(Debug, Clone, Copy)]
pub struct ComprasMateriaPrimaApi<'a, T = UreqTransport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> ComprasMateriaPrimaApi<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn list(&self) -> Result<Vec<CompraMateriaPrima>, ApiError> {
        COMPRAS.list(self.api)
    }

    /// Listing endpoint that joins the supplier name into each purchase.
    pub fn obtener(&self) -> Result<Vec<CompraMateriaPrima>, ApiError> {
        self.api.get(OBTENER_COMPRAS)
    }

    pub fn get(&self, id: impl Into<ResourceId>) -> Result<CompraMateriaPrima, ApiError> {
        COMPRAS.get(self.api, &id.into())
    }

    pub fn create(&self, payload: &CompraMateriaPrimaPayload) -> Result<CompraMateriaPrima, ApiError> {
        COMPRAS.create(self.api, payload)
    }

    pub fn update(
        &self,
        id: impl Into<ResourceId>,
        payload: &CompraMateriaPrimaUpdate,
    ) -> Result<CompraMateriaPrima, ApiError> {
        COMPRAS.update(self.api, &id.into(), payload)
    }

    pub fn deactivate(&self, id: impl Into<ResourceId>) -> Result<CompraMateriaPrima, ApiError> {
        self.update(id, &CompraMateriaPrimaUpdate::deactivate())
    }

    pub fn delete(&self, id: impl Into<ResourceId>) -> Result<(), ApiError> {
        COMPRAS.delete(self.api, &id.into())
    }

    /// Register every line of a purchase in a single request. The response
    /// body is returned as-is.
    pub fn registrar_detalles(
        &self,
        id_compra: impl Into<ResourceId>,
        detalles: &[DetalleCompraItem],
    ) -> Result<Value, ApiError> {
        let id_compra = id_compra.into();
        let body = RegistrarDetallesCompra {
            id_compra: &id_compra,
            detalles,
        };
        self.api.post(REGISTRAR_DETALLES, &body)
    }

    pub fn detalles(&self, id_compra: impl Into<ResourceId>) -> Result<Vec<DetalleCompra>, ApiError> {
        self.api
            .get_with_query(DETALLES_BY_COMPRA, &parent_query("id_compra", &id_compra.into()))
    }

    pub fn update_detalle(
        &self,
        id: impl Into<ResourceId>,
        payload: &DetalleCompraUpdate,
    ) -> Result<DetalleCompra, ApiError> {
        DETALLES.update(self.api, &id.into(), payload)
    }

    /// The detail endpoint replaces the whole line, so quantity and unit
    /// price must be resent. Without them nothing is sent and
    /// `ApiError::MissingPayload` is returned.
    pub fn deactivate_detalle(
        &self,
        id: impl Into<ResourceId>,
        precio: Option<&DetallePrecio>,
    ) -> Result<DetalleCompra, ApiError> {
        let precio = precio.ok_or(ApiError::MissingPayload {
            operation: "deactivate_detalle_compra",
        })?;
        self.update_detalle(id, &DetalleCompraUpdate::deactivate(precio))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn compras_materia_prima(&self) -> ComprasMateriaPrimaApi<'_, T> {
        ComprasMateriaPrimaApi::new(self)
    }
}
