//! WASM platform implementations
//!
//! Browser-backed providers: `localStorage`, `Math.random`, the JS `Date`
//! object and the service worker registry.

use crate::infrastructure::config::PlayerConfig;
use crate::ports::outbound::platform::{
    DocumentProvider, OfflineCacheProvider, RandomProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use chrono::{DateTime, Local, NaiveDate, Utc};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Browser clock via `js_sys::Date`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_else(Utc::now)
    }

    fn today(&self) -> NaiveDate {
        // Local calendar fields, as the browser reports them
        let date = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            date.get_full_year() as i32,
            date.get_month() + 1,
            date.get_date(),
        )
        .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Browser random provider using `Math.random`
#[derive(Clone, Default)]
pub struct WasmRandomProvider;

impl RandomProvider for WasmRandomProvider {
    fn random_f64(&self) -> f64 {
        js_sys::Math::random()
    }
}

/// `localStorage`-backed storage
///
/// Every call resolves the storage object afresh; a browser that blocks
/// storage (private mode, disabled cookies) degrades to "nothing stored".
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::local_storage() else {
            tracing::warn!(key, "localStorage unavailable, value not saved");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::error!(key, error = ?e, "Failed to write localStorage");
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!(key, error = ?e, "Failed to remove localStorage item");
            }
        }
    }
}

/// Registers the service worker so the page keeps working offline
#[derive(Clone, Default)]
pub struct WasmOfflineCacheProvider;

impl OfflineCacheProvider for WasmOfflineCacheProvider {
    fn register(&self, script_url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();

        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
            .unwrap_or(false);
        if !supported {
            tracing::info!("Service workers not supported, skipping offline cache");
            return;
        }

        let promise = navigator.service_worker().register(script_url);
        let script_url = script_url.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => tracing::info!(%script_url, "Service worker registered"),
                Err(e) => tracing::warn!(%script_url, error = ?e, "Service worker registration failed"),
            }
        });
    }
}

/// Browser document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create platform services for the browser
pub fn create_platform(_config: &PlayerConfig) -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmRandomProvider,
        WasmStorageProvider,
        WasmOfflineCacheProvider,
        WasmDocumentProvider,
    )
}
