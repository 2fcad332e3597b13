//! Byte LRU - A size-aware least-recently-used cache
//!
//! [`cache::LruCache`] maps string keys to values that report their own byte
//! size and evicts least recently used entries once a byte budget is exceeded.
//! The remaining modules host it behind a small HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{ByteSize, LruCache};
pub use config::Config;
