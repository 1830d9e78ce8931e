#![forbid(unsafe_code)]

//! Tally configuration handling. Parses a TOML file into a strongly-typed
//! structure. Protocol-level values found here (the prime exponent) must be
//! identical across every party of a protocol instance; load-time validation
//! rejects values the accumulator layer would refuse anyway.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{CoreError, CoreResult};

/// Inclusive bounds for the prime-size exponent `k` (prime bit length is
/// `2^k`). Below 4 the arithmetic degenerates; above 12 a single prime
/// search becomes impractical. Must match the accumulator crate's bounds.
pub const MIN_PRIME_EXPONENT: u32 = 4;
pub const MAX_PRIME_EXPONENT: u32 = 12;

/// Primary configuration structure shared across Tally components.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Logging verbosity (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,

    /// Protocol parameter: primes are `2^prime_exponent` bits long and the
    /// public generator is `2^prime_exponent + 1`.
    #[serde(default = "default_prime_exponent")]
    pub prime_exponent: u32,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            prime_exponent: default_prime_exponent(),
        }
    }
}

fn default_prime_exponent() -> u32 {
    9 // 512-bit primes
}

impl TallyConfig {
    /// Load a configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let data = fs::read_to_string(&path).map_err(CoreError::from)?;
        let cfg = toml::from_str::<TallyConfig>(&data).map_err(CoreError::ConfigParse)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load config alias version
    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        Self::from_file(path)
    }

    fn validate(&self) -> CoreResult<()> {
        if !(MIN_PRIME_EXPONENT..=MAX_PRIME_EXPONENT).contains(&self.prime_exponent) {
            return Err(CoreError::InvalidConfig(format!(
                "prime_exponent {} outside {}..={}",
                self.prime_exponent, MIN_PRIME_EXPONENT, MAX_PRIME_EXPONENT
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply() {
        let cfg = TallyConfig::default();
        assert_eq!(cfg.prime_exponent, 9);
        assert_eq!(cfg.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn parses_partial_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "prime_exponent = 7").unwrap();
        let cfg = TallyConfig::from_file(f.path()).unwrap();
        assert_eq!(cfg.prime_exponent, 7);
        // untouched field keeps its default
        assert_eq!(cfg.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn rejects_out_of_range_exponent() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "prime_exponent = 40").unwrap();
        assert!(matches!(
            TallyConfig::from_file(f.path()),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "prime_exponent = = 9").unwrap();
        assert!(matches!(
            TallyConfig::from_file(f.path()),
            Err(CoreError::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            TallyConfig::from_file("/nonexistent/tally.toml"),
            Err(CoreError::Io(_))
        ));
    }
}
