//! Runtime configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Capacity reserved for a freshly allocated render buffer.
    pub pool_initial_capacity: usize,

    /// Buffers that grew beyond this are dropped on release instead of being
    /// recycled. `None` keeps every buffer.
    pub pool_max_retained_capacity: Option<usize>,

    /// Upper bound on idle buffers kept in the free list. `None` is unbounded.
    /// Outstanding leases are never limited.
    pub pool_max_idle: Option<usize>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            pool_initial_capacity: 4 * 1024, // 4 KiB
            pool_max_retained_capacity: None,
            pool_max_idle: None,
        }
    }
}

impl RuntimeConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `TEMPLET_POOL_INITIAL_CAPACITY`: initial buffer capacity in bytes
    /// - `TEMPLET_POOL_MAX_RETAINED_CAPACITY`: largest buffer kept for reuse
    /// - `TEMPLET_POOL_MAX_IDLE`: max idle buffers in the free list
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup` instead of the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("TEMPLET_POOL_INITIAL_CAPACITY") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.pool_initial_capacity = v;
            }
        }

        if let Some(s) = lookup("TEMPLET_POOL_MAX_RETAINED_CAPACITY") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.pool_max_retained_capacity = Some(v);
            }
        }

        if let Some(s) = lookup("TEMPLET_POOL_MAX_IDLE") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.pool_max_idle = Some(v);
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(doc: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(doc)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.pool_max_retained_capacity {
            if max < self.pool_initial_capacity {
                return Err(Error::Config(format!(
                    "pool_max_retained_capacity ({max}) is below pool_initial_capacity ({})",
                    self.pool_initial_capacity
                )));
            }
        }
        Ok(())
    }
}
