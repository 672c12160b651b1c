//! Scalar wire types shared by every entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Record identifier. The backend hands out integers, but callers may hold
/// ids as text (route params, form values); both are forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{n}"),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        ResourceId::Number(value)
    }
}

impl From<i32> for ResourceId {
    fn from(value: i32) -> Self {
        ResourceId::Number(value.into())
    }
}

impl From<u32> for ResourceId {
    fn from(value: u32) -> Self {
        ResourceId::Number(value.into())
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        ResourceId::Text(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        ResourceId::Text(value)
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(value: &ResourceId) -> Self {
        value.clone()
    }
}

/// A quantity or amount the backend may send either as a JSON number or as
/// a decimal string (`"12.50"`). Whichever form arrives is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Number(n) => write!(f, "{n}"),
            Numeric::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Number(value.into())
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Number(value.into())
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Number(value.into())
    }
}

/// JSON has no NaN or infinity, so non-finite floats are rejected.
impl TryFrom<f64> for Numeric {
    type Error = ApiError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        serde_json::Number::from_f64(value)
            .map(Numeric::Number)
            .ok_or_else(|| ApiError::Serialization(format!("{value} is not a JSON number")))
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Numeric::Text(value)
    }
}

pub(crate) fn default_activo() -> bool {
    true
}
