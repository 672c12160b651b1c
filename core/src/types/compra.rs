//! Raw material purchases and their detail lines.

use serde::{Deserialize, Serialize};

use super::detalle::DetallePrecio;
use super::scalar::{default_activo, Numeric, ResourceId};

/// A purchase header. Listing endpoints join the supplier name in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompraMateriaPrima {
    pub id: ResourceId,
    pub fecha_compra: String,
    pub id_proveedor: ResourceId,
    #[serde(default)]
    pub nombre_proveedor: Option<String>,
    pub total: Numeric,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompraMateriaPrimaPayload {
    pub id_proveedor: ResourceId,
    pub fecha_compra: String,
    pub total: Numeric,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompraMateriaPrimaUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_proveedor: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_compra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl CompraMateriaPrimaUpdate {
    pub fn deactivate() -> Self {
        Self {
            activo: Some(false),
            ..Self::default()
        }
    }
}

/// One purchased raw material line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetalleCompra {
    pub id: ResourceId,
    pub id_compra: ResourceId,
    pub id_materia_prima: ResourceId,
    pub cantidad: Numeric,
    pub precio_unitario: Numeric,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

/// A line item sent to the bulk registration endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetalleCompraItem {
    pub id_materia_prima: ResourceId,
    pub cantidad: Numeric,
    pub precio_unitario: Numeric,
}

/// Body of `POST /api/registrar_detalles_compra`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrarDetallesCompra<'a> {
    pub id_compra: &'a ResourceId,
    pub detalles: &'a [DetalleCompraItem],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetalleCompraUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_materia_prima: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_unitario: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl DetalleCompraUpdate {
    pub fn deactivate(precio: &DetallePrecio) -> Self {
        Self {
            cantidad: Some(precio.cantidad.clone()),
            precio_unitario: Some(precio.precio_unitario.clone()),
            activo: Some(false),
            ..Self::default()
        }
    }
}
