use std::path::PathBuf;

use wayline::{Configurable, GlobalConfig};

#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Command program document.
    pub program: Option<PathBuf>,
    /// Run the built-in line-trace circuit program.
    pub circuit: bool,
    /// Introduce jitter in the sensor data.
    pub jitter: bool,
    /// Seed for the jitter source.
    pub seed: u64,
    /// Run unpaced instead of at frame rate.
    pub headless: bool,
    /// Stop after this many frames.
    pub frames: Option<u64>,
    /// Global configuration.
    pub global: GlobalConfig,
}

impl Configurable for SimConfig {
    fn global(&self) -> &GlobalConfig {
        &self.global
    }
}
