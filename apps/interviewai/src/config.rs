//! Server configuration.
//!
//! Built from CLI flags (with environment fallbacks) in `cli`, then shared
//! read-only with every handler.

use interviewai_core::ProcessingTiming;

/// Default listen host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pacing of the fake processing animation.
    pub timing: ProcessingTiming,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timing: ProcessingTiming::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for the listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Replace the processing timing.
    #[must_use]
    pub fn with_timing(mut self, timing: ProcessingTiming) -> Self {
        self.timing = timing;
        self
    }
}
