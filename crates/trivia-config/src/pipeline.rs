//! Generation pipeline tuning.

use serde::{Deserialize, Serialize};

/// Default provider-call attempts per generation (including the first).
const fn default_max_attempts() -> u32 {
    3
}

/// Default fixed delay between failed attempts, in milliseconds.
const fn default_retry_delay_ms() -> u64 {
    1000
}

/// Default cap on evaluate/optimize cycles in the quality gate.
const fn default_max_optimize_cycles() -> u32 {
    2
}

const fn default_quality_gate() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Provider-call attempts per generation, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay between failed attempts (no backoff).
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Cap on evaluate/optimize cycles before accepting unverified.
    #[serde(default = "default_max_optimize_cycles")]
    pub max_optimize_cycles: u32,

    /// Whether the quality gate runs at all. Off reduces every request to a
    /// single generation call.
    #[serde(default = "default_quality_gate")]
    pub quality_gate: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            max_optimize_cycles: default_max_optimize_cycles(),
            quality_gate: default_quality_gate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.retry_delay_ms, 1000);
        assert_eq!(config.max_optimize_cycles, 2);
        assert!(config.quality_gate);
    }
}
