use tracing::Level;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub max_level: Level,
    pub report_timings: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            max_level: Level::INFO,
            report_timings: false,
        }
    }
}

impl LoggingConfig {
    /// Reads `LOG_LEVEL` at build time; unknown values keep the default.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(level) = option_env!("LOG_LEVEL").and_then(parse_level) {
            config.max_level = level;
        }
        config
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    raw.trim().parse::<Level>().ok()
}

/// Routes `tracing` events to the browser console. Call once before rendering.
pub fn init_logging(config: LoggingConfig) {
    let wasm_config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(config.max_level)
        .set_report_logs_in_timings(config.report_timings)
        .build();
    tracing_wasm::set_as_global_default_with_config(wasm_config);
    tracing::info!("Console logging initialised at {}", config.max_level);
}
