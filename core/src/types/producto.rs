//! Finished products.

use serde::{Deserialize, Serialize};

use super::scalar::{default_activo, Numeric, ResourceId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: ResourceId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub unidad_medida: String,
    pub stock_actual: Numeric,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductoPayload {
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub unidad_medida: String,
    pub stock_actual: Numeric,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

/// Partial update; omitted fields are left untouched on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidad_medida: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_actual: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl ProductoUpdate {
    pub fn deactivate() -> Self {
        Self {
            activo: Some(false),
            ..Self::default()
        }
    }
}
