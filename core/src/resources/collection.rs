//! The path/verb/envelope plumbing shared by every resource wrapper.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::ResourceId;

/// A REST collection: `path` for list/create, `path/{id}` for members, with
/// request bodies wrapped under `envelope`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Collection {
    pub path: &'static str,
    pub envelope: &'static str,
}

impl Collection {
    pub(crate) const fn new(path: &'static str, envelope: &'static str) -> Self {
        Self { path, envelope }
    }

    fn member(&self, id: &ResourceId) -> String {
        format!("{}/{id}", self.path)
    }

    pub(crate) fn list<R: DeserializeOwned, T: Transport>(&self, api: &ApiClient<T>) -> Result<Vec<R>, ApiError> {
        api.get(self.path)
    }

    pub(crate) fn get<R: DeserializeOwned, T: Transport>(
        &self,
        api: &ApiClient<T>,
        id: &ResourceId,
    ) -> Result<R, ApiError> {
        api.get(&self.member(id))
    }

    pub(crate) fn create<R, P, T>(&self, api: &ApiClient<T>, payload: &P) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
        T: Transport,
    {
        api.post(self.path, &Envelope::new(self.envelope, payload))
    }

    pub(crate) fn update<R, P, T>(&self, api: &ApiClient<T>, id: &ResourceId, payload: &P) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
        T: Transport,
    {
        api.put(&self.member(id), &Envelope::new(self.envelope, payload))
    }

    /// Hard delete. Whatever body the server answers with is discarded.
    pub(crate) fn delete<T: Transport>(&self, api: &ApiClient<T>, id: &ResourceId) -> Result<(), ApiError> {
        api.delete::<IgnoredAny>(&self.member(id)).map(|_| ())
    }
}

/// `?<key>=<id>` for endpoints that filter by a parent record.
pub(crate) fn parent_query(key: &'static str, id: &ResourceId) -> [(&'static str, String); 1] {
    [(key, id.to_string())]
}
