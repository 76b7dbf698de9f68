use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use bullana_auth::auth::AuthService;
use bullana_auth::client::Navigator;
use bullana_auth::config::Config;
use bullana_auth::session::store::MemorySessionStore;
use std::sync::{Arc, Mutex};

/// Navigator that records every redirect target for assertions
#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

impl RecordingNavigator {
    pub fn targets(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

/// Builds a service against the given base URL with fresh store and navigator
pub fn service_for(
    base_url: &str,
) -> (AuthService, Arc<MemorySessionStore>, Arc<RecordingNavigator>) {
    let store = Arc::new(MemorySessionStore::new());
    let navigator = Arc::new(RecordingNavigator::default());
    let service = AuthService::with_navigator(
        Config::with_base_url(base_url),
        store.clone(),
        navigator.clone(),
    )
    .expect("service construction");
    (service, store, navigator)
}

/// Forges an unsigned JWT-shaped token with the given expiry claim
pub fn forge_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload =
        URL_SAFE_NO_PAD.encode(serde_json::json!({"exp": exp, "sub": "1"}).to_string());
    format!("{header}.{payload}.signature")
}
