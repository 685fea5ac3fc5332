//! # Carrier Billing
//!
//! Usage-based plan billing for a mobile carrier reseller.
//!
//! ## Architecture
//!
//! - **domain**: plan catalog, usage rater, statements and repository traits
//! - **application**: billing, transaction and usage services
//! - **infrastructure**: in-memory storage and startup seed data
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: runtime lifecycle and logging setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};
pub use domain::{rate_usage, resolve_pricing_rule, ChargeBreakdown, DomainError, PricingRule};
pub use infrastructure::storage::{SeedData, SeedError};
pub use infrastructure::InMemoryStorage;
pub use interfaces::create_api_router;
pub use server::{init_tracing, ServerHandle};
