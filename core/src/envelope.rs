//! Single-key request envelopes: `{ "<resource>": { ...payload } }`.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Wraps a payload under one named key. The payload is serialized as-is, so
/// a partial update stays partial.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a, T: ?Sized> {
    key: &'static str,
    payload: &'a T,
}

impl<'a, T: ?Sized> Envelope<'a, T> {
    pub fn new(key: &'static str, payload: &'a T) -> Self {
        Self { key, payload }
    }
}

impl<T: Serialize + ?Sized> Serialize for Envelope<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.payload)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClienteUpdate;
    use serde_json::json;

    #[test]
    fn wraps_payload_under_key() {
        let payload = json!({"nombre": "Acme"});
        let value = serde_json::to_value(Envelope::new("cliente", &payload)).unwrap();
        assert_eq!(value, json!({"cliente": {"nombre": "Acme"}}));
    }

    #[test]
    fn partial_payload_stays_partial() {
        let update = ClienteUpdate {
            correo: Some("ventas@acme.test".to_string()),
            ..ClienteUpdate::default()
        };
        let value = serde_json::to_value(Envelope::new("cliente", &update)).unwrap();
        assert_eq!(value, json!({"cliente": {"correo": "ventas@acme.test"}}));
    }
}
