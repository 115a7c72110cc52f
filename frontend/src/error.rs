use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. Callers log these and fall back to a
/// static rendering; nothing here is shown to the visitor.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element is not mounted")]
    Unmounted,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js(message)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse the {name} catalog: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
