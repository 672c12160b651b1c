//! In-memory stand-in for the production-management backend.
//!
//! Records are stored as JSON objects per table. Create and update bodies
//! arrive wrapped in the resource envelope (`{ "cliente": {...} }`); updates
//! merge the supplied fields into the stored row.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Default)]
pub struct Table {
    next_id: u64,
    rows: BTreeMap<u64, Map<String, Value>>,
}

impl Table {
    fn insert(&mut self, mut row: Map<String, Value>) -> Value {
        self.next_id += 1;
        row.insert("id".to_string(), Value::from(self.next_id));
        row.entry("activo").or_insert(Value::Bool(true));
        self.rows.insert(self.next_id, row.clone());
        Value::Object(row)
    }
}

pub type Db = Arc<RwLock<HashMap<&'static str, Table>>>;

/// State for a plain collection: table name plus the envelope key its
/// bodies are wrapped in.
#[derive(Clone)]
struct Resource {
    db: Db,
    table: &'static str,
    envelope: &'static str,
}

/// State for detail lines filtered and registered by a parent id.
#[derive(Clone)]
struct Details {
    db: Db,
    table: &'static str,
    parent_key: &'static str,
}

/// State for listings that join a name from another table.
#[derive(Clone)]
struct Joined {
    db: Db,
    table: &'static str,
    foreign_key: &'static str,
    foreign_table: &'static str,
    name_field: &'static str,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let resource = |table: &'static str, envelope: &'static str| Resource {
        db: db.clone(),
        table,
        envelope,
    };
    let details = |table: &'static str, parent_key: &'static str| Details {
        db: db.clone(),
        table,
        parent_key,
    };
    let joined = |table: &'static str, foreign_key: &'static str, foreign_table: &'static str| Joined {
        db: db.clone(),
        table,
        foreign_key,
        foreign_table,
        name_field: match foreign_table {
            "proveedores" => "nombre_proveedor",
            _ => "nombre_cliente",
        },
    };

    let simple = |base: &str, res: Resource| -> Router {
        Router::new()
            .route(base, get(list_rows).post(create_row))
            .route(&format!("{base}/{{id}}"), get(get_row).put(update_row))
            .with_state(res)
    };

    let materias_primas: Router = Router::new()
        .route("/api/materias_primas", get(list_rows).post(create_row))
        .route("/api/materias_primas/{id}", put(update_row))
        .with_state(resource("materias_primas", "materia_prima"));

    let compras: Router = Router::new()
        .route("/api/compras_materia_prima", get(list_rows).post(create_row))
        .route(
            "/api/compras_materia_prima/{id}",
            get(get_row).put(update_row).delete(delete_row),
        )
        .with_state(resource("compras_materia_prima", "compra_materia_prima"))
        .route(
            "/api/detalle_compras/{id}",
            put(update_row).with_state(resource("detalles_compra", "detalle_compra")),
        );

    let detalles_compra: Router = Router::new()
        .route("/api/registrar_detalles_compra", post(register_details))
        .route("/api/obtener_detalles_compra_by_id_compra", get(details_by_parent))
        .with_state(details("detalles_compra", "id_compra"));

    let pedidos: Router = Router::new()
        .route("/api/pedidos", get(list_rows).post(create_row))
        .route("/api/pedidos/{id}", get(get_row).put(update_row))
        .with_state(resource("pedidos", "pedido"))
        .route(
            "/api/detalles_pedido/{id}",
            put(update_row).with_state(resource("detalles_pedido", "detalle_pedido")),
        );

    let detalles_pedido: Router = Router::new()
        .route("/api/registrar_detalles_pedido", post(register_details))
        .route("/api/obtener_detalles_pedido_by_id_pedido", get(details_by_parent))
        .with_state(details("detalles_pedido", "id_pedido"));

    let producciones: Router = Router::new()
        .route("/api/obtener_producciones", get(list_rows))
        .route("/api/producciones", post(create_row))
        .route(
            "/api/producciones/{id}",
            get(get_row).put(update_row).delete(delete_row),
        )
        .with_state(resource("producciones", "produccion"));

    let controles: Router = Router::new()
        .route("/api/controles_calidad", post(create_row))
        .route("/api/controles_calidad/{id}", put(update_row))
        .with_state(resource("controles_calidad", "control_calidad"))
        .route(
            "/api/obtener_control_calidad_por_produccion",
            get(details_by_parent).with_state(details("controles_calidad", "id_produccion")),
        );

    let listings: Router = Router::new()
        .route(
            "/api/obtener_compras_materia_prima",
            get(joined_rows).with_state(joined("compras_materia_prima", "id_proveedor", "proveedores")),
        )
        .route(
            "/api/obtener_pedidos",
            get(joined_rows).with_state(joined("pedidos", "id_cliente", "clientes")),
        );

    Router::new()
        .merge(simple("/api/clientes", resource("clientes", "cliente")))
        .merge(simple("/api/proveedores", resource("proveedores", "proveedor")))
        .merge(simple("/api/productos", resource("productos", "producto")))
        .merge(materias_primas)
        .merge(compras)
        .merge(detalles_compra)
        .merge(pedidos)
        .merge(detalles_pedido)
        .merge(producciones)
        .merge(controles)
        .merge(listings)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Text form used to compare ids that may arrive as numbers or strings.
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn parse_id(raw: &str) -> Result<u64, StatusCode> {
    raw.parse().map_err(|_| StatusCode::NOT_FOUND)
}

/// Pull the object out of `{ "<envelope>": {...} }`.
fn unwrap_envelope(mut body: Value, envelope: &str) -> Result<Map<String, Value>, StatusCode> {
    match body.get_mut(envelope).map(Value::take) {
        Some(Value::Object(fields)) => Ok(fields),
        _ => Err(StatusCode::UNPROCESSABLE_ENTITY),
    }
}

async fn list_rows(State(res): State<Resource>) -> Json<Vec<Value>> {
    let db = res.db.read().await;
    let rows = db
        .get(res.table)
        .map(|t| t.rows.values().cloned().map(Value::Object).collect())
        .unwrap_or_default();
    Json(rows)
}

async fn get_row(State(res): State<Resource>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let id = parse_id(&id)?;
    let db = res.db.read().await;
    db.get(res.table)
        .and_then(|t| t.rows.get(&id))
        .cloned()
        .map(|row| Json(Value::Object(row)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_row(
    State(res): State<Resource>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let fields = unwrap_envelope(body, res.envelope)?;
    let row = res.db.write().await.entry(res.table).or_default().insert(fields);
    tracing::debug!(table = res.table, "created row");
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update_row(
    State(res): State<Resource>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let id = parse_id(&id)?;
    let fields = unwrap_envelope(body, res.envelope)?;
    let mut db = res.db.write().await;
    let row = db
        .get_mut(res.table)
        .and_then(|t| t.rows.get_mut(&id))
        .ok_or(StatusCode::NOT_FOUND)?;
    for (key, value) in fields {
        if key != "id" {
            row.insert(key, value);
        }
    }
    Ok(Json(Value::Object(row.clone())))
}

async fn delete_row(State(res): State<Resource>, Path(id): Path<String>) -> Result<StatusCode, StatusCode> {
    let id = parse_id(&id)?;
    let mut db = res.db.write().await;
    db.get_mut(res.table)
        .and_then(|t| t.rows.remove(&id))
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn register_details(
    State(det): State<Details>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Vec<Value>>), StatusCode> {
    let parent = body
        .get(det.parent_key)
        .filter(|v| id_text(v).is_some())
        .cloned()
        .ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    let lines = body
        .get("detalles")
        .and_then(Value::as_array)
        .ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;

    let mut db = det.db.write().await;
    let table = db.entry(det.table).or_default();
    let mut created = Vec::with_capacity(lines.len());
    for line in lines {
        let Value::Object(fields) = line else {
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        };
        let mut fields = fields.clone();
        fields.insert(det.parent_key.to_string(), parent.clone());
        created.push(table.insert(fields));
    }
    tracing::debug!(table = det.table, count = created.len(), "registered detail lines");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn details_by_parent(
    State(det): State<Details>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    let wanted = params.get(det.parent_key).ok_or(StatusCode::BAD_REQUEST)?;
    let db = det.db.read().await;
    let rows = db
        .get(det.table)
        .map(|t| {
            t.rows
                .values()
                .filter(|row| row.get(det.parent_key).and_then(id_text).as_ref() == Some(wanted))
                .cloned()
                .map(Value::Object)
                .collect()
        })
        .unwrap_or_default();
    Ok(Json(rows))
}

async fn joined_rows(State(join): State<Joined>) -> Json<Vec<Value>> {
    let db = join.db.read().await;
    let names: HashMap<String, Value> = db
        .get(join.foreign_table)
        .map(|t| {
            t.rows
                .iter()
                .filter_map(|(id, row)| row.get("nombre").map(|n| (id.to_string(), n.clone())))
                .collect()
        })
        .unwrap_or_default();

    let rows = db
        .get(join.table)
        .map(|t| {
            t.rows
                .values()
                .map(|row| {
                    let mut row = row.clone();
                    let name = row
                        .get(join.foreign_key)
                        .and_then(id_text)
                        .and_then(|key| names.get(&key).cloned())
                        .unwrap_or(Value::Null);
                    row.insert(join.name_field.to_string(), name);
                    Value::Object(row)
                })
                .collect()
        })
        .unwrap_or_default();
    Json(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_assigns_sequential_ids_and_defaults_activo() {
        let mut table = Table::default();
        let first = table.insert(Map::new());
        let second = table.insert(json!({"activo": false}).as_object().cloned().unwrap());
        assert_eq!(first["id"], 1);
        assert_eq!(first["activo"], true);
        assert_eq!(second["id"], 2);
        assert_eq!(second["activo"], false);
    }

    #[test]
    fn unwrap_envelope_requires_object_under_key() {
        let fields = unwrap_envelope(json!({"cliente": {"nombre": "Acme"}}), "cliente").unwrap();
        assert_eq!(fields["nombre"], "Acme");
        assert_eq!(
            unwrap_envelope(json!({"nombre": "Acme"}), "cliente").unwrap_err(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            unwrap_envelope(json!({"cliente": "Acme"}), "cliente").unwrap_err(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn id_text_normalizes_numbers_and_strings() {
        assert_eq!(id_text(&json!(7)).as_deref(), Some("7"));
        assert_eq!(id_text(&json!("P9")).as_deref(), Some("P9"));
        assert_eq!(id_text(&json!(null)), None);
    }
}
