//! Domain DTOs for the backend resources.
//!
//! # Design
//! Each entity has three shapes: the record the server returns, the payload
//! accepted on creation (required fields plain, optional ones skipped when
//! unset) and a partial update where every field is optional and omitted
//! fields never reach the wire. Unknown response fields are ignored.

mod cliente;
mod compra;
mod detalle;
mod materia_prima;
mod pedido;
mod produccion;
mod producto;
mod proveedor;
mod scalar;

pub use cliente::{Cliente, ClientePayload, ClienteUpdate};
pub use compra::{
    CompraMateriaPrima, CompraMateriaPrimaPayload, CompraMateriaPrimaUpdate, DetalleCompra, DetalleCompraItem,
    DetalleCompraUpdate, RegistrarDetallesCompra,
};
pub use detalle::DetallePrecio;
pub use materia_prima::{MateriaPrima, MateriaPrimaPayload, MateriaPrimaUpdate};
pub use pedido::{
    DetallePedido, DetallePedidoItem, DetallePedidoUpdate, Pedido, PedidoPayload, PedidoUpdate,
    RegistrarDetallesPedido,
};
pub use produccion::{
    ControlCalidad, ControlCalidadPayload, ControlCalidadUpdate, Produccion, ProduccionEstado, ProduccionPayload,
    ProduccionUpdate,
};
pub use producto::{Producto, ProductoPayload, ProductoUpdate};
pub use proveedor::{Proveedor, ProveedorPayload, ProveedorUpdate};
pub use scalar::{Numeric, ResourceId};
