//! Customer orders and their detail lines.

use serde::{Deserialize, Serialize};

use super::detalle::DetallePrecio;
use super::scalar::{default_activo, Numeric, ResourceId};

/// An order header. Listing endpoints join the customer name in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    pub id: ResourceId,
    pub fecha_pedido: String,
    pub id_cliente: ResourceId,
    #[serde(default)]
    pub nombre_cliente: Option<String>,
    pub total: Numeric,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoPayload {
    pub id_cliente: ResourceId,
    pub fecha_pedido: String,
    pub total: Numeric,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PedidoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_cliente: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_pedido: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl PedidoUpdate {
    pub fn deactivate() -> Self {
        Self {
            activo: Some(false),
            ..Self::default()
        }
    }
}

/// One ordered product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetallePedido {
    pub id: ResourceId,
    pub id_pedido: ResourceId,
    pub id_producto: ResourceId,
    pub cantidad: Numeric,
    pub precio_unitario: Numeric,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

/// A line item sent to the bulk registration endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetallePedidoItem {
    pub id_producto: ResourceId,
    pub cantidad: Numeric,
    pub precio_unitario: Numeric,
}

/// Body of `POST /api/registrar_detalles_pedido`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrarDetallesPedido<'a> {
    pub id_pedido: &'a ResourceId,
    pub detalles: &'a [DetallePedidoItem],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetallePedidoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_producto: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_unitario: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl DetallePedidoUpdate {
    pub fn deactivate(precio: &DetallePrecio) -> Self {
        Self {
            cantidad: Some(precio.cantidad.clone()),
            precio_unitario: Some(precio.precio_unitario.clone()),
            activo: Some(false),
            ..Self::default()
        }
    }
}
