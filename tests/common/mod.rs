#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use pokedex_lib::{
    core::config::CatalogConfig, providers::catalog::CatalogClient, retriever::pipeline::Pipeline,
};

#[derive(Debug, Clone)]
pub enum Route {
    Json(Value),
    Delayed(Value, Duration),
    Text(&'static str),
}

struct CatalogState {
    routes: HashMap<String, Route>,
    hits: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

/// Local stand-in for the remote catalog, serving fixed documents on an ephemeral port.
pub struct MockCatalog {
    pub base_url: String,
    state: Arc<CatalogState>,
}

impl MockCatalog {
    /// `build` receives the server's base url so fixtures can embed references back to it.
    pub async fn start<F>(build: F) -> Self
    where
        F: FnOnce(&str) -> HashMap<String, Route>,
    {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock catalog");
        let addr = listener.local_addr().expect("mock catalog addr");
        let base_url = format!("http://{addr}/api/v2");

        let state = Arc::new(CatalogState {
            routes: build(&base_url),
            hits: Mutex::new(vec![]),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        });
        let app = Router::new()
            .route("/api/v2/{kind}/{id}", get(serve_entity))
            .with_state(Arc::clone(&state));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock catalog serve");
        });

        Self { base_url, state }
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.client())
    }

    pub fn client(&self) -> CatalogClient {
        CatalogClient::new(CatalogConfig::new(self.base_url.clone()))
    }

    pub fn client_with(&self, configure: impl FnOnce(CatalogConfig) -> CatalogConfig) -> CatalogClient {
        CatalogClient::new(configure(CatalogConfig::new(self.base_url.clone())))
    }

    pub fn hits(&self) -> Vec<String> {
        self.state.hits.lock().expect("hits lock").clone()
    }

    pub fn hit_count(&self, path: &str) -> usize {
        self.hits().iter().filter(|hit| hit.as_str() == path).count()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.state.peak_in_flight.load(Ordering::SeqCst)
    }
}

async fn serve_entity(
    State(state): State<Arc<CatalogState>>,
    Path((kind, id)): Path<(String, String)>,
) -> Response {
    let key = format!("{kind}/{id}");
    state.hits.lock().expect("hits lock").push(format!("/{key}"));

    let current = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.peak_in_flight.fetch_max(current, Ordering::SeqCst);

    let response = match state.routes.get(&key).cloned() {
        Some(Route::Json(body)) => Json(body).into_response(),
        Some(Route::Delayed(body, delay)) => {
            tokio::time::sleep(delay).await;
            Json(body).into_response()
        }
        Some(Route::Text(body)) => (StatusCode::OK, body).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    };

    state.in_flight.fetch_sub(1, Ordering::SeqCst);
    response
}

pub fn url(base: &str, kind: &str, id: &str) -> String {
    format!("{base}/{kind}/{id}")
}

pub fn stat_doc(name: &str, id: i64) -> Value {
    json!({ "name": name, "id": id, "is_battle_only": false })
}

pub fn ability_doc(name: &str, id: i64, holders: &[&str]) -> Value {
    json!({
        "name": name,
        "id": id,
        "generation": {"name": "generation-iii"},
        "effect_entries": [
            {"effect": format!("Effet de {name}."), "language": {"name": "fr"}},
            {"effect": format!("Long\neffect of {name}."), "language": {"name": "en"}}
        ],
        "flavor_text_entries": [
            {"flavor_text": format!("Short\neffect of {name}."), "language": {"name": "en"}}
        ],
        "pokemon": holders
            .iter()
            .map(|holder| json!({"pokemon": {"name": holder, "url": "unused"}, "is_hidden": false}))
            .collect::<Vec<_>>()
    })
}

pub fn move_doc(name: &str, id: i64, power: Option<i64>, damage_class: &str) -> Value {
    json!({
        "name": name,
        "id": id,
        "generation": {"name": "generation-i"},
        "accuracy": 100,
        "power": power,
        "pp": 30,
        "damage_class": {"name": damage_class},
        "type": {"name": "electric"},
        "flavor_text_entries": [
            {"flavor_text": "Une attaque.", "language": {"name": "fr"}},
            {"flavor_text": format!("Uses\n{name}."), "language": {"name": "en"}}
        ]
    })
}

pub fn creature_doc(
    base: &str,
    name: &str,
    id: i64,
    stats: &[(&str, i64)],
    abilities: &[&str],
    moves: &[&str],
) -> Value {
    json!({
        "name": name,
        "id": id,
        "height": 4,
        "weight": 60,
        "types": [{"slot": 1, "type": {"name": "electric", "url": url(base, "type", "13")}}],
        "stats": stats
            .iter()
            .map(|(stat, value)| json!({
                "base_stat": value,
                "effort": 0,
                "stat": {"name": stat, "url": url(base, "stat", stat)}
            }))
            .collect::<Vec<_>>(),
        "abilities": abilities
            .iter()
            .enumerate()
            .map(|(index, ability)| json!({
                "ability": {"name": ability, "url": url(base, "ability", ability)},
                "is_hidden": index > 0,
                "slot": index + 1
            }))
            .collect::<Vec<_>>(),
        "moves": moves
            .iter()
            .map(|name| json!({
                "move": {"name": name, "url": url(base, "move", name)},
                "version_group_details": [{"level_learned_at": 1}]
            }))
            .collect::<Vec<_>>()
    })
}

/// Pikachu plus everything it references, a second creature and a broken entry.
pub fn standard_catalog(base: &str) -> HashMap<String, Route> {
    let mut routes = HashMap::new();
    routes.insert(
        "pokemon/pikachu".to_string(),
        Route::Json(creature_doc(
            base,
            "pikachu",
            25,
            &[("hp", 35), ("speed", 90)],
            &["static", "lightning-rod"],
            &["thunder-shock", "growl"],
        )),
    );
    routes.insert(
        "pokemon/raichu".to_string(),
        Route::Json(creature_doc(
            base,
            "raichu",
            26,
            &[("hp", 60)],
            &["static"],
            &["thunder-shock"],
        )),
    );
    routes.insert(
        "pokemon/smeargle".to_string(),
        Route::Json(creature_doc(
            base,
            "smeargle",
            235,
            &[("hp", 55)],
            &["static"],
            &["growl", "thunder-shock", "growl"],
        )),
    );
    routes.insert("stat/hp".to_string(), Route::Json(stat_doc("hp", 1)));
    routes.insert("stat/speed".to_string(), Route::Json(stat_doc("speed", 6)));
    routes.insert(
        "ability/static".to_string(),
        Route::Json(ability_doc("static", 9, &["pikachu", "raichu"])),
    );
    routes.insert(
        "ability/lightning-rod".to_string(),
        Route::Json(ability_doc("lightning-rod", 31, &["pikachu", "raichu"])),
    );
    routes.insert(
        "move/thunder-shock".to_string(),
        Route::Json(move_doc("thunder-shock", 84, Some(40), "special")),
    );
    routes.insert(
        "move/growl".to_string(),
        Route::Json(move_doc("growl", 45, None, "status")),
    );
    routes.insert("pokemon/missingno".to_string(), Route::Text("<html>oops</html>"));
    routes
}
