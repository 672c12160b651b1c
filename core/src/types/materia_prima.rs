//! Raw materials consumed by production.

use serde::{Deserialize, Serialize};

use super::scalar::{default_activo, Numeric, ResourceId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MateriaPrima {
    pub id: ResourceId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub unidad_medida: String,
    pub stock_actual: Numeric,
    pub stock_minimo: Numeric,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

/// Every field is required on creation; the backend rejects partial rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MateriaPrimaPayload {
    pub nombre: String,
    pub descripcion: String,
    pub unidad_medida: String,
    pub stock_actual: Numeric,
    pub stock_minimo: Numeric,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MateriaPrimaUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidad_medida: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_actual: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl MateriaPrimaUpdate {
    pub fn deactivate() -> Self {
        Self {
            activo: Some(false),
            ..Self::default()
        }
    }
}
