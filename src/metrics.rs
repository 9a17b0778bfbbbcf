use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounterVec, Opts, Registry};

use crate::errors::Error;

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref GENERATE_REQUEST_COUNTER: IntCounterVec = IntCounterVec::new(
        Opts::new("generate_request_counter", "Generate request counter"),
        &["status"]
    )
    .expect("GENERATE_REQUEST_COUNTER metric can't be created");
    pub static ref CLIPBOARD_WRITE_COUNTER: IntCounterVec = IntCounterVec::new(
        Opts::new("clipboard_write_counter", "Clipboard write counter"),
        &["status"]
    )
    .expect("CLIPBOARD_WRITE_COUNTER metric can't be created");
}

pub fn register_metrics() {
    REGISTRY
        .register(Box::new(GENERATE_REQUEST_COUNTER.clone()))
        .expect("GENERATE_REQUEST_COUNTER can't be registered");

    REGISTRY
        .register(Box::new(CLIPBOARD_WRITE_COUNTER.clone()))
        .expect("CLIPBOARD_WRITE_COUNTER can't be registered")
}

/// Renders the registry in the text exposition format.
pub fn render() -> Result<String, Error> {
    let encoder = prometheus::TextEncoder::new();
    let mut buffer = Vec::new();

    encoder
        .encode(&REGISTRY.gather(), &mut buffer)
        .map_err(|e| Error::Metrics {
            method_name: "encoder.encode".to_string(),
            error: e.into(),
        })?;

    String::from_utf8(buffer).map_err(|e| Error::Metrics {
        method_name: "String::from_utf8".to_string(),
        error: e.into(),
    })
}

/// Registers the counters at most once per test binary.
#[cfg(test)]
pub fn register_metrics_once() {
    static REGISTER: std::sync::Once = std::sync::Once::new();

    REGISTER.call_once(register_metrics);
}
