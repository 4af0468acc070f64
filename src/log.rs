use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

/// Settings for the process wide `tracing` subscriber
#[derive(Debug, Clone)]
pub struct Logger {
    use_ansi_color: bool,
    filter: String,
}

impl Logger {
    pub fn new(use_ansi_color: bool, filter: impl Into<String>) -> Self {
        Self {
            use_ansi_color,
            filter: filter.into(),
        }
    }

    /// parse the filter directives without installing anything
    pub fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        EnvFilter::try_new(&self.filter)
            .with_context(|| format!("invalid log filter {:?}", self.filter))
    }

    /// Install the subscriber, fails if the filter is invalid or one is already installed
    pub fn init(&self) -> anyhow::Result<()> {
        let filter = self.env_filter()?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(self.use_ansi_color)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("failed to install the log subscriber: {e}"))
    }
}

#[cfg(test)]
mod test {
    use crate::log::Logger;

    #[test]
    fn filters_are_validated() {
        assert!(Logger::new(false, "info").env_filter().is_ok());
        assert!(Logger::new(false, "rangekit=trace,warn").env_filter().is_ok());
        assert!(Logger::new(false, "rangekit=loud").env_filter().is_err());
    }
}
