use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under one target per component.
pub struct TracingLogger {
    target: &'static str,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::for_component("recommender")
    }

    /// Tags every line with `component` so `RUST_LOG` filters can single it out.
    pub fn for_component(target: &'static str) -> Self {
        Self { target }
    }

    pub fn component(&self) -> &'static str {
        self.target
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(component = self.target, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(component = self.target, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(component = self.target, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(component = self.target, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_recommender_component() {
        assert_eq!(TracingLogger::default().component(), "recommender");
    }

    #[test]
    fn should_log_without_subscriber() {
        let logger = TracingLogger::for_component("catalog");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.debug("debug");
        assert_eq!(logger.component(), "catalog");
    }
}
