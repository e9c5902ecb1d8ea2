use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "autogestion_operations_total",
        "CRUD operations by entity, operation and outcome",
        &["entity", "operation", "outcome"]
    )
    .expect("register operations_total")
});

pub fn record(entity: &str, operation: &str, outcome: &str) {
    OPERATIONS_TOTAL.with_label_values(&[entity, operation, outcome]).inc();
}

/// Render the default registry in the Prometheus text format.
pub fn encode() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
