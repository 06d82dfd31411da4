//! # kade-store: Persistence and Orchestration for Kade Storefront
//!
//! Everything with side effects lives here: the SQLite pool, cart snapshot
//! and order repositories, gateway adapters, and the cart session that
//! drives checkout.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     kade-core (pure logic)                              │
//! │        Cart • Pricing • PaymentService • Order assembly                 │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │                 ★ kade-store (THIS CRATE) ★                             │
//! │                                                                         │
//! │   ┌──────────┐  ┌────────────┐  ┌───────────┐  ┌─────────────────┐     │
//! │   │   pool   │  │ repository │  │  session  │  │     gateway     │     │
//! │   │  Store   │  │ carts +    │  │ CartSess. │  │ Bounded +       │     │
//! │   │  config  │  │ orders     │  │ checkout  │  │ Simulated       │     │
//! │   └──────────┘  └────────────┘  └───────────┘  └─────────────────┘     │
//! │                                                                         │
//! │            SQLite (WAL) • embedded migrations • tracing                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pool`] - Connection pool, configuration, repository access
//! - [`migrations`] - Embedded schema migrations
//! - [`repository`] - Cart snapshot and order repositories
//! - [`session`] - Cart session + checkout orchestration
//! - [`gateway`] - Timeout-bounding and simulated gateway adapters
//! - [`error`] - Storage error types

pub mod error;
pub mod gateway;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod session;

pub use error::{StoreError, StoreResult};
pub use gateway::{BoundedGateway, SimulatedGateway};
pub use pool::{Store, StoreConfig};
pub use session::{CartSession, CheckoutError};
