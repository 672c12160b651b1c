//! One wrapper per backend resource family.
//!
//! Every wrapper borrows the shared `ApiClient` it was constructed with and
//! only marshals parameters: it picks a path and verb, wraps the body in the
//! resource's envelope and returns whatever the client returns. No wrapper
//! depends on another.

mod collection;

pub mod clientes;
pub mod compras;
pub mod materias_primas;
pub mod pedidos;
pub mod producciones;
pub mod productos;
pub mod proveedores;

pub use clientes::ClientesApi;
pub use compras::ComprasMateriaPrimaApi;
pub use materias_primas::MateriasPrimasApi;
pub use pedidos::PedidosApi;
pub use producciones::ProduccionesApi;
pub use productos::ProductosApi;
pub use proveedores::ProveedoresApi;
