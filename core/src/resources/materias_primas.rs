//! `/api/materias_primas`
//!
//! There is no single-record GET for raw materials; callers read them from
//! the list.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resources::collection::Collection;
use crate::transport::{Transport, UreqTransport};
use crate::types::{MateriaPrima, MateriaPrimaPayload, MateriaPrimaUpdate, ResourceId};

const MATERIAS_PRIMAS: Collection = Collection::new("/api/materias_primas", "materia_prima");

#[derive(Debug, Clone, Copy)]
pub struct MateriasPrimasApi<'a, T = UreqTransport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> MateriasPrimasApi<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn list(&self) -> Result<Vec<MateriaPrima>, ApiError> {
        MATERIAS_PRIMAS.list(self.api)
    }

    pub fn create(&self, payload: &MateriaPrimaPayload) -> Result<MateriaPrima, ApiError> {
        MATERIAS_PRIMAS.create(self.api, payload)
    }

    pub fn update(&self, id: impl Into<ResourceId>, payload: &MateriaPrimaUpdate) -> Result<MateriaPrima, ApiError> {
        MATERIAS_PRIMAS.update(self.api, &id.into(), payload)
    }

    pub fn deactivate(&self, id: impl Into<ResourceId>) -> Result<MateriaPrima, ApiError> {
        self.update(id, &MateriaPrimaUpdate::deactivate())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn materias_primas(&self) -> MateriasPrimasApi<'_, T> {
        MateriasPrimasApi::new(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{client, url, RecordingTransport};

    const HARINA: &str = r#"{"id":2,"nombre":"Harina","descripcion":"0000","unidad_medida":"kg","stock_actual":100,"stock_minimo":"20.00"}"#;

    #[test]
    fn list_and_create() {
        let transport = RecordingTransport::default();
        let api = client(&transport);

        transport.respond(200, &format!("[{HARINA}]"));
        let all = api.materias_primas().list().unwrap();
        assert_eq!(all[0].nombre, "Harina");
        assert!(all[0].activo, "missing activo reads as active");
        assert_eq!(transport.last().path, url("/api/materias_primas"));

        transport.respond(201, HARINA);
        let payload = MateriaPrimaPayload {
            nombre: "Harina".to_string(),
            descripcion: "0000".to_string(),
            unidad_medida: "kg".to_string(),
            stock_actual: "100".into(),
            stock_minimo: 20.into(),
        };
        api.materias_primas().create(&payload).unwrap();
        assert_eq!(transport.last().method, HttpMethod::Post);
        assert_eq!(
            transport.last_body(),
            json!({"materia_prima": {
                "nombre": "Harina",
                "descripcion": "0000",
                "unidad_medida": "kg",
                "stock_actual": "100",
                "stock_minimo": 20
            }})
        );
    }

    #[test]
    fn update_puts_partial_envelope() {
        let transport = RecordingTransport::default();
        transport.respond(200, HARINA);
        let update = MateriaPrimaUpdate {
            stock_minimo: Some(25.into()),
            ..MateriaPrimaUpdate::default()
        };
        client(&transport).materias_primas().update(2, &update).unwrap();

        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, url("/api/materias_primas/2"));
        assert_eq!(transport.last_body(), json!({"materia_prima": {"stock_minimo": 25}}));
    }

    #[test]
    fn deactivate_is_activo_false_update() {
        let transport = RecordingTransport::default();
        transport.respond(200, HARINA);
        client(&transport).materias_primas().deactivate("2").unwrap();
        assert_eq!(transport.last().path, url("/api/materias_primas/2"));
        assert_eq!(transport.last_body(), json!({"materia_prima": {"activo": false}}));
    }
}
