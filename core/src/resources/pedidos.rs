//! Customer orders (`/api/pedidos`) and their detail lines.

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resources::collection::{parent_query, Collection};
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    DetallePedido, DetallePedidoItem, DetallePedidoUpdate, DetallePrecio, Pedido, PedidoPayload, PedidoUpdate,
    RegistrarDetallesPedido, ResourceId,
};

const PEDIDOS: Collection = Collection::new("/api/pedidos", "pedido");
const DETALLES: Collection = Collection::new("/api/detalles_pedido", "detalle_pedido");

const OBTENER_PEDIDOS: &str = "/api/obtener_pedidos";
const REGISTRAR_DETALLES: &str = "/api/registrar_detalles_pedido";
const DETALLES_BY_PEDIDO: &str = "/api/obtener_detalles_pedido_by_id_pedido";

/// Orders have no hard delete; `deactivate` is the only way to retire one.
#[derive(Debug, Clone, Copy)]
pub struct PedidosApi<'a, T = UreqTransport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> PedidosApi<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn list(&self) -> Result<Vec<Pedido>, ApiError> {
        PEDIDOS.list(self.api)
    }

    /// Listing endpoint that joins the customer name into each order.
    pub fn obtener(&self) -> Result<Vec<Pedido>, ApiError> {
        self.api.get(OBTENER_PEDIDOS)
    }

    pub fn get(&self, id: impl Into<ResourceId>) -> Result<Pedido, ApiError> {
        PEDIDOS.get(self.api, &id.into())
    }

    pub fn create(&self, payload: &PedidoPayload) -> Result<Pedido, ApiError> {
        PEDIDOS.create(self.api, payload)
    }

    pub fn update(&self, id: impl Into<ResourceId>, payload: &PedidoUpdate) -> Result<Pedido, ApiError> {
        PEDIDOS.update(self.api, &id.into(), payload)
    }

    pub fn deactivate(&self, id: impl Into<ResourceId>) -> Result<Pedido, ApiError> {
        self.update(id, &PedidoUpdate::deactivate())
    }

    pub fn registrar_detalles(
        &self,
        id_pedido: impl Into<ResourceId>,
        detalles: &[DetallePedidoItem],
    ) -> Result<Value, ApiError> {
        let id_pedido = id_pedido.into();
        let body = RegistrarDetallesPedido {
            id_pedido: &id_pedido,
            detalles,
        };
        self.api.post(REGISTRAR_DETALLES, &body)
    }

    pub fn detalles(&self, id_pedido: impl Into<ResourceId>) -> Result<Vec<DetallePedido>, ApiError> {
        self.api
            .get_with_query(DETALLES_BY_PEDIDO, &parent_query("id_pedido", &id_pedido.into()))
    }

    pub fn update_detalle(
        &self,
        id: impl Into<ResourceId>,
        payload: &DetallePedidoUpdate,
    ) -> Result<DetallePedido, ApiError> {
        DETALLES.update(self.api, &id.into(), payload)
    }

    /// Fails with `ApiError::MissingPayload`, before any request, when
    /// `precio` is `None`.
    pub fn deactivate_detalle(
        &self,
        id: impl Into<ResourceId>,
        precio: Option<&DetallePrecio>,
    ) -> Result<DetallePedido, ApiError> {
        let precio = precio.ok_or(ApiError::MissingPayload {
            operation: "deactivate_detalle_pedido",
        })?;
        self.update_detalle(id, &DetallePedidoUpdate::deactivate(precio))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn pedidos(&self) -> PedidosApi<'_, T> {
        PedidosApi::new(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{client, url, RecordingTransport};

    const PEDIDO: &str = r#"{"id":4,"fecha_pedido":"2024-06-02","id_cliente":1,"total":300,"activo":true}"#;

    #[test]
    fn crud_routes() {
        let transport = RecordingTransport::default();
        let api = client(&transport);

        transport.respond(200, &format!("[{PEDIDO}]"));
        api.pedidos().list().unwrap();
        assert_eq!(transport.last().path, url("/api/pedidos"));

        transport.respond(200, r#"[{"id":4,"fecha_pedido":"2024-06-02","id_cliente":1,"nombre_cliente":"Acme","total":300}]"#);
        let joined = api.pedidos().obtener().unwrap();
        assert_eq!(transport.last().path, url("/api/obtener_pedidos"));
        assert_eq!(joined[0].nombre_cliente.as_deref(), Some("Acme"));

        transport.respond(200, PEDIDO);
        api.pedidos().get(4).unwrap();
        assert_eq!(transport.last().path, url("/api/pedidos/4"));

        transport.respond(201, PEDIDO);
        let payload = PedidoPayload {
            id_cliente: 1.into(),
            fecha_pedido: "2024-06-02".to_string(),
            total: 300.into(),
            activo: Some(true),
        };
        api.pedidos().create(&payload).unwrap();
        assert_eq!(transport.last().method, HttpMethod::Post);
        assert_eq!(
            transport.last_body(),
            json!({"pedido": {"id_cliente": 1, "fecha_pedido": "2024-06-02", "total": 300, "activo": true}})
        );

        transport.respond(200, PEDIDO);
        api.pedidos().deactivate(4).unwrap();
        assert_eq!(transport.last().path, url("/api/pedidos/4"));
        assert_eq!(transport.last_body(), json!({"pedido": {"activo": false}}));
    }

    #[test]
    fn detalles_by_text_id_uses_string_query_value() {
        let transport = RecordingTransport::default();
        transport.respond(200, "[]");
        client(&transport).pedidos().detalles("P9").unwrap();

        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url().unwrap().as_str(),
            "http://localhost:4000/api/obtener_detalles_pedido_by_id_pedido?id_pedido=P9"
        );
    }

    #[test]
    fn registrar_detalles_posts_parent_and_items() {
        let transport = RecordingTransport::default();
        transport.respond(201, "[]");
        let items = [DetallePedidoItem {
            id_producto: 5.into(),
            cantidad: 3.into(),
            precio_unitario: "100.00".into(),
        }];
        client(&transport).pedidos().registrar_detalles("4", &items).unwrap();

        assert_eq!(transport.last().path, url("/api/registrar_detalles_pedido"));
        assert_eq!(
            transport.last_body(),
            json!({"id_pedido": "4", "detalles": [{"id_producto": 5, "cantidad": 3, "precio_unitario": "100.00"}]})
        );
    }

    #[test]
    fn deactivate_detalle_requires_payload() {
        let transport = RecordingTransport::default();
        let api = client(&transport);

        let err = api.pedidos().deactivate_detalle(8, None).unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingPayload {
                operation: "deactivate_detalle_pedido"
            }
        ));
        assert!(transport.requests().is_empty());

        transport.respond(
            200,
            r#"{"id":8,"id_pedido":4,"id_producto":5,"cantidad":3,"precio_unitario":100,"activo":false}"#,
        );
        api.pedidos()
            .deactivate_detalle(8, Some(&DetallePrecio::new(3, 100)))
            .unwrap();
        assert_eq!(transport.last().path, url("/api/detalles_pedido/8"));
        assert_eq!(
            transport.last_body(),
            json!({"detalle_pedido": {"cantidad": 3, "precio_unitario": 100, "activo": false}})
        );
    }
}
