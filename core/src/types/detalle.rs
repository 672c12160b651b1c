//! Pieces shared by purchase and order detail lines.

use serde::{Deserialize, Serialize};

use super::scalar::Numeric;

/// Quantity and unit price of a detail line.
///
/// The detail update endpoints replace the whole line, so deactivating one
/// has to resend these two values alongside `activo: false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetallePrecio {
    pub cantidad: Numeric,
    pub precio_unitario: Numeric,
}

impl DetallePrecio {
    pub fn new(cantidad: impl Into<Numeric>, precio_unitario: impl Into<Numeric>) -> Self {
        Self {
            cantidad: cantidad.into(),
            precio_unitario: precio_unitario.into(),
        }
    }
}
