//! Production runs and their quality controls.
//!
//! The collection is listed through `/api/obtener_producciones`; members
//! live under `/api/producciones/{id}`.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resources::collection::{parent_query, Collection};
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    ControlCalidad, ControlCalidadPayload, ControlCalidadUpdate, Produccion, ProduccionPayload, ProduccionUpdate,
    ResourceId,
};

const PRODUCCIONES: Collection = Collection::new("/api/producciones", "produccion");
const CONTROLES: Collection = Collection::new("/api/controles_calidad", "control_calidad");

const OBTENER_PRODUCCIONES: &str = "/api/obtener_producciones";
const CONTROLES_BY_PRODUCCION: &str = "/api/obtener_control_calidad_por_produccion";

#[derive(Debug, Clone, Copy)]
pub struct ProduccionesApi<'a, T = UreqTransport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> ProduccionesApi<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn list(&self) -> Result<Vec<Produccion>, ApiError> {
        self.api.get(OBTENER_PRODUCCIONES)
    }

    pub fn get(&self, id: impl Into<ResourceId>) -> Result<Produccion, ApiError> {
        PRODUCCIONES.get(self.api, &id.into())
    }

    pub fn create(&self, payload: &ProduccionPayload) -> Result<Produccion, ApiError> {
        PRODUCCIONES.create(self.api, payload)
    }

    pub fn update(&self, id: impl Into<ResourceId>, payload: &ProduccionUpdate) -> Result<Produccion, ApiError> {
        PRODUCCIONES.update(self.api, &id.into(), payload)
    }

    pub fn deactivate(&self, id: impl Into<ResourceId>) -> Result<Produccion, ApiError> {
        self.update(id, &ProduccionUpdate::deactivate())
    }

    pub fn delete(&self, id: impl Into<ResourceId>) -> Result<(), ApiError> {
        PRODUCCIONES.delete(self.api, &id.into())
    }

    pub fn controles_calidad(&self, id_produccion: impl Into<ResourceId>) -> Result<Vec<ControlCalidad>, ApiError> {
        self.api.get_with_query(
            CONTROLES_BY_PRODUCCION,
            &parent_query("id_produccion", &id_produccion.into()),
        )
    }

    pub fn create_control_calidad(&self, payload: &ControlCalidadPayload) -> Result<ControlCalidad, ApiError> {
        CONTROLES.create(self.api, payload)
    }

    pub fn update_control_calidad(
        &self,
        id: impl Into<ResourceId>,
        payload: &ControlCalidadUpdate,
    ) -> Result<ControlCalidad, ApiError> {
        CONTROLES.update(self.api, &id.into(), payload)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn producciones(&self) -> ProduccionesApi<'_, T> {
        ProduccionesApi::new(self)
    }
}
