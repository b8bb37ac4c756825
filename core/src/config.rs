use serde::{Deserialize, Serialize};

pub const DEFAULT_VOCAB_SIZE: usize = 20_000;
pub const DEFAULT_NEIGHBORS: usize = 5;

/// Caller-supplied knobs for encoding and retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of globally most frequent terms kept as matrix columns.
    pub vocab_size: usize,
    /// Number of neighbors returned per query.
    pub neighbors: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { vocab_size: DEFAULT_VOCAB_SIZE, neighbors: DEFAULT_NEIGHBORS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_driver_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.vocab_size, 20_000);
        assert_eq!(cfg.neighbors, 5);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{ "neighbors": 3 }"#).unwrap();
        assert_eq!(cfg, EngineConfig { vocab_size: DEFAULT_VOCAB_SIZE, neighbors: 3 });
        let cfg: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn serializes_field_names() {
        let json = serde_json::to_value(EngineConfig { vocab_size: 10, neighbors: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({ "vocab_size": 10, "neighbors": 2 }));
    }
}
