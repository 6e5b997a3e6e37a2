//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); events carry
//! `order_id`, `service_type` and friends as structured fields instead.
//!
//! ## Levels
//!
//! - `info` - every recorded action, actor and system lifecycle
//! - `debug` - placement decisions, request payloads, reallocation passes
//! - `warn` - orders dropped for lack of storage, pickups of unknown orders
//! - `error` - broken placement invariants, failed tasks
//!
//! ```bash
//! RUST_LOG=info cargo run -- --orders orders.json
//! RUST_LOG=fulfillment=debug cargo run -- --orders orders.json
//! ```
//!
//! With `RUST_LOG=info` a short run looks like:
//!
//! ```text
//! INFO Actor started service_type="PlacementService"
//! INFO Reallocator started period_ms=1000
//! INFO place: Action action=place order_id=a1 timestamp=1760777000123456
//! INFO place: Action action=discard order_id=r7 timestamp=1760777000623901
//! INFO pickup: Action action=pickup order_id=a1 timestamp=1760777004871022
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact() // spans inline, e.g. "place:" or "pickup:"
        .init();
}
