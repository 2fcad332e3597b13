//! Cache Module
//!
//! Size-aware LRU cache: values report their byte size, and least recently
//! used entries are evicted once a byte budget is exceeded.

mod lru;
mod size;
mod stats;
mod store;


// Re-export public types
pub use lru::{EvictionHook, Iter, LruCache};
pub use size::ByteSize;
pub use stats::CacheStats;
pub use store::CacheStore;
