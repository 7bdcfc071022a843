//! Configuration loading from pulse.toml
//!
//! The configuration file is discovered by walking up from the current
//! directory. CLI flags override file values; the file overrides the
//! built-in defaults (which are the harness's canonical constants).

use std::path::Path;
use std::time::Duration;

use pulsebench_core::SamplerConfig;
use serde::{Deserialize, Serialize};

/// PulseBench configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PulseConfig {
    /// Sampling-loop configuration.
    #[serde(default)]
    pub sampler: SamplerSection,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[sampler]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerSection {
    /// Invocations per batch between analyzer passes.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Convergence sample-count floor.
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,
    /// Per-probe sample ceiling.
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,
    /// Per-probe wall-clock budget (e.g. "1s", "250ms").
    #[serde(default = "default_time_budget")]
    pub time_budget: String,
}

impl Default for SamplerSection {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            min_samples: default_min_samples(),
            max_samples: default_max_samples(),
            time_budget: default_time_budget(),
        }
    }
}

fn default_batch_size() -> usize {
    20
}
fn default_min_samples() -> usize {
    100
}
fn default_max_samples() -> usize {
    2000
}
fn default_time_budget() -> String {
    "1s".to_string()
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Default output format: "human" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl PulseConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover and load `pulse.toml` by walking up from the current
    /// directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("pulse.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Materialize the sampler section as a [`SamplerConfig`], falling back
    /// to the canonical budget when the duration string does not parse.
    pub fn sampler_config(&self) -> SamplerConfig {
        let time_budget = parse_duration(&self.sampler.time_budget)
            .unwrap_or_else(|_| Duration::from_secs(1));
        SamplerConfig {
            batch_size: self.sampler.batch_size.max(1),
            min_samples: self.sampler.min_samples,
            max_samples: self.sampler.max_samples.max(1),
            time_budget,
        }
    }
}

/// Parse a duration string (e.g. "1s", "250ms", "2m").
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    let (num_part, unit_part) = s
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map(|(i, _)| s.split_at(i))
        .unwrap_or((s, "s"));

    let value: f64 = num_part
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;

    let nanos_per_unit: u64 = match unit_part.to_lowercase().as_str() {
        "ns" => 1,
        "us" => 1_000,
        "ms" => 1_000_000,
        "s" | "" => 1_000_000_000,
        "m" | "min" => 60_000_000_000,
        _ => anyhow::bail!("Unknown duration unit: {}", unit_part),
    };

    Ok(Duration::from_nanos((value * nanos_per_unit as f64) as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_canonical_constants() {
        let config = PulseConfig::default();
        assert_eq!(config.sampler_config(), SamplerConfig::default());
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("1s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("100us").unwrap(), Duration::from_micros(100));
        assert_eq!(parse_duration("500ns").unwrap(), Duration::from_nanos(500));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
        assert!(parse_duration("").is_err());
        assert!(parse_duration("10fortnights").is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_str = r#"
            [sampler]
            time_budget = "250ms"
            max_samples = 500
        "#;
        let config: PulseConfig = toml::from_str(toml_str).unwrap();
        let sampler = config.sampler_config();
        assert_eq!(sampler.time_budget, Duration::from_millis(250));
        assert_eq!(sampler.max_samples, 500);
        // Untouched fields keep the canonical defaults.
        assert_eq!(sampler.batch_size, 20);
        assert_eq!(sampler.min_samples, 100);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_bad_budget_falls_back_to_one_second() {
        let toml_str = r#"
            [sampler]
            time_budget = "whenever"
        "#;
        let config: PulseConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sampler_config().time_budget, Duration::from_secs(1));
    }
}
