//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Body of a cache hit (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    pub value: String,
    /// Bytes the entry occupies in the budget (key + value)
    pub bytes: usize,
}

impl GetResponse {
    pub fn new(key: String, value: String) -> Self {
        Self {
            bytes: key.len() + value.len(),
            key,
            value,
        }
    }
}

/// Outcome of a write (PUT /set)
///
/// `resident` is false when the entry was larger than the whole budget and
/// got evicted by its own insert.
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    pub message: String,
    pub key: String,
    pub bytes: usize,
    pub resident: bool,
}

impl SetResponse {
    pub fn new(key: String, bytes: usize, resident: bool) -> Self {
        let message = if resident {
            format!("Stored '{}' ({} bytes)", key, bytes)
        } else {
            format!("'{}' ({} bytes) exceeds the byte budget and was evicted", key, bytes)
        };
        Self {
            message,
            key,
            bytes,
            resident,
        }
    }
}

/// Snapshot of cache counters and byte usage (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    pub used_bytes: usize,
    /// 0 = unbounded
    pub capacity_bytes: usize,
    pub hit_rate: f64,
    /// used / capacity, null when unbounded
    pub fill_ratio: Option<f64>,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            fill_ratio: stats.fill_ratio(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            used_bytes: stats.used_bytes,
            capacity_bytes: stats.capacity_bytes,
        }
    }
}

/// Liveness probe body (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// JSON body of every error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_response_counts_bytes() {
        let resp = GetResponse::new("key1".to_string(), "1234".to_string());
        assert_eq!(resp.bytes, 8);

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["value"], "1234");
        assert_eq!(json["bytes"], 8);
    }

    #[test]
    fn test_set_response_resident() {
        let resp = SetResponse::new("my_key".to_string(), 12, true);
        assert!(resp.message.contains("Stored 'my_key'"));

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["resident"], true);
        assert_eq!(json["bytes"], 12);
    }

    #[test]
    fn test_set_response_evicted_on_insert() {
        let resp = SetResponse::new("big".to_string(), 4096, false);
        assert!(resp.message.contains("exceeds the byte budget"));
        assert!(!resp.resident);
    }

    #[test]
    fn test_stats_response_from_stats() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            total_entries: 100,
            used_bytes: 2048,
            capacity_bytes: 4096,
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.fill_ratio, Some(0.5));
        assert_eq!(resp.used_bytes, 2048);
    }

    #[test]
    fn test_stats_response_unbounded() {
        let resp = StatsResponse::from(CacheStats::default());
        assert_eq!(resp.hit_rate, 0.0);

        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["fill_ratio"].is_null());
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_value(HealthResponse::healthy()).unwrap();
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_value(ErrorResponse::new("Key not found: k")).unwrap();
        assert_eq!(json["error"], "Key not found: k");
    }
}
