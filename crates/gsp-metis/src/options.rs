//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Where the solver keeps its coarsening data while partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryMode {
    /// Spill intermediate data to disk. Suited to graphs that do not fit
    /// comfortably in working memory during partitioning.
    OnDisk,
    /// Keep everything in memory.
    InMemory,
}

/// Options passed to the partitioning backend.
///
/// Everything not named here stays at the solver's defaults: equal-sized
/// part targets, default imbalance tolerance, edge-cut objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetisOptions {
    pub memory_mode: MemoryMode,
}

impl Default for MetisOptions {
    fn default() -> Self {
        Self {
            memory_mode: MemoryMode::OnDisk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_on_disk() {
        assert_eq!(MetisOptions::default().memory_mode, MemoryMode::OnDisk);
    }

    #[test]
    fn test_serde_round_trip() {
        let options = MetisOptions {
            memory_mode: MemoryMode::InMemory,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"memory_mode":"in-memory"}"#);
        let back: MetisOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}
