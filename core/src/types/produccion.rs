//! Production runs and the quality controls recorded against them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::scalar::{default_activo, Numeric, ResourceId};

/// Lifecycle state of a production run, carried on the wire as its label.
///
/// `OPTIONS` are the states a form offers. The backend stores a free string,
/// so any other label it sends is kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProduccionEstado {
    EnProceso,
    Finalizado,
    Other(String),
}

impl ProduccionEstado {
    /// The known states, in the order a form should offer them.
    pub const OPTIONS: [ProduccionEstado; 2] = [ProduccionEstado::EnProceso, ProduccionEstado::Finalizado];

    pub fn label(&self) -> &str {
        match self {
            ProduccionEstado::EnProceso => "En Proceso",
            ProduccionEstado::Finalizado => "Finalizado",
            ProduccionEstado::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProduccionEstado::Other(_))
    }
}

impl fmt::Display for ProduccionEstado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for ProduccionEstado {
    fn from(label: String) -> Self {
        match label.as_str() {
            "En Proceso" => ProduccionEstado::EnProceso,
            "Finalizado" => ProduccionEstado::Finalizado,
            _ => ProduccionEstado::Other(label),
        }
    }
}

impl From<&str> for ProduccionEstado {
    fn from(label: &str) -> Self {
        label.to_string().into()
    }
}

impl From<ProduccionEstado> for String {
    fn from(estado: ProduccionEstado) -> Self {
        match estado {
            ProduccionEstado::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Strict parse for form input: only the labels in `OPTIONS` are accepted.
impl FromStr for ProduccionEstado {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|estado| estado.label() == s)
            .ok_or_else(|| format!("unknown production state `{s}`"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produccion {
    pub id: ResourceId,
    pub fecha_produccion: String,
    pub cantidad_producida: Numeric,
    pub estado: ProduccionEstado,
    #[serde(default)]
    pub id_producto: Option<ResourceId>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProduccionPayload {
    pub fecha_produccion: String,
    pub cantidad_producida: Numeric,
    pub estado: ProduccionEstado,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_producto: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProduccionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_produccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantidad_producida: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<ProduccionEstado>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_producto: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl ProduccionUpdate {
    pub fn deactivate() -> Self {
        Self {
            activo: Some(false),
            ..Self::default()
        }
    }
}

/// A quality inspection of one production run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlCalidad {
    pub id: ResourceId,
    pub id_produccion: ResourceId,
    pub fecha_control: String,
    pub resultado: String,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlCalidadPayload {
    pub id_produccion: ResourceId,
    pub fecha_control: String,
    pub resultado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlCalidadUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_control: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resultado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}
