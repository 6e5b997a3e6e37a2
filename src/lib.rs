//! # Fulfillment
//!
//! A storage-allocation and freshness-eviction engine for a delivery
//! kitchen. Orders are placed into temperature-controlled storage, decay while
//! they wait, and are either picked up by a courier or discarded to make room.
//!
//! ## Storage
//!
//! Three groups of fixed-capacity units:
//! - **cooler** - ideal for cold orders
//! - **heater** - ideal for hot orders
//! - **shelf** - ideal for room-temperature orders, overflow for the rest
//!
//! An order outside its ideal group loses freshness twice as fast. When
//! everything is full, the engine first tries to move a shelved hot or cold
//! order back into freed ideal storage and only then discards the least
//! fresh order on the shelf. A background loop keeps draining a full shelf
//! into freed heater and cooler space.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`engine`], [`storage`], [`freshness`])
//! - **Role**: All placement, pickup, move and discard decisions, plus the
//!   [`ActionLog`](engine::ActionLog) that records them.
//! - **Key items**: [`FulfillmentEngine`](engine::FulfillmentEngine),
//!   [`StorageGroup`](storage::StorageGroup), [`StorageUnit`](storage::StorageUnit).
//!
//! ### 2. The Mailboxes ([`framework`], [`services`])
//! - **Role**: A generic actor that owns a [`Service`](framework::Service) and
//!   handles its requests one at a time. Placement and pickup each get one.
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: [`FulfillmentClient`](clients::FulfillmentClient) hides message
//!   passing behind `place_order` / `pickup_order`.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Starts and stops everything.
//! - **Key items**: [`FulfillmentSystem`](lifecycle::FulfillmentSystem),
//!   [`run_harness`](lifecycle::run_harness), [`load_config`](config::load_config).
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --orders orders.json
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod engine;
pub mod framework;
pub mod freshness;
pub mod lifecycle;
pub mod model;
pub mod services;
pub mod storage;
