//! Buffer pool configuration

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Configuration for buffer pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Name of the pool, used in log output
    pub name: String,
    /// Storage capacity given to pre-allocated buffers
    pub default_capacity: usize,
    /// Number of buffers to construct up front
    pub initial_count: usize,
    /// Whether to construct `initial_count` buffers at pool creation.
    /// When false the pool starts empty and grows on demand.
    pub pre_allocate: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            default_capacity: defaults::DEFAULT_BUFFER_CAPACITY,
            initial_count: defaults::DEFAULT_INITIAL_COUNT,
            pre_allocate: false,
        }
    }
}

impl PoolConfig {
    /// Create a new configuration with a custom name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the capacity given to pre-allocated buffers
    pub fn with_default_capacity(mut self, capacity: usize) -> Self {
        self.default_capacity = capacity;
        self
    }

    /// Set the number of buffers constructed up front
    pub fn with_initial_count(mut self, count: usize) -> Self {
        self.initial_count = count;
        self
    }

    /// Enable or disable pre-allocation
    pub fn with_pre_allocate(mut self, pre_allocate: bool) -> Self {
        self.pre_allocate = pre_allocate;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::WirebufError;

        if self.name.is_empty() {
            return Err(WirebufError::invalid_parameter(
                "name",
                "Pool name cannot be empty",
            ));
        }

        if self.pre_allocate && self.initial_count == 0 {
            return Err(WirebufError::invalid_parameter(
                "initial_count",
                "Pre-allocation requires a nonzero initial count",
            ));
        }

        Ok(())
    }
}

/// Builder pattern for pool configuration
pub struct PoolConfigBuilder {
    config: PoolConfig,
}

impl PoolConfigBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: PoolConfig::new(name),
        }
    }

    /// Set the capacity given to pre-allocated buffers
    pub fn default_capacity(mut self, capacity: usize) -> Self {
        self.config.default_capacity = capacity;
        self
    }

    /// Set the number of buffers constructed up front
    pub fn initial_count(mut self, count: usize) -> Self {
        self.config.initial_count = count;
        self
    }

    /// Enable or disable pre-allocation
    pub fn pre_allocate(mut self, enable: bool) -> Self {
        self.config.pre_allocate = enable;
        self
    }

    /// Build the configuration
    pub fn build(self) -> crate::error::Result<PoolConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
