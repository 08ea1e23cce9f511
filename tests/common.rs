use site_extract::ExtractorConfig;

pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Default limits with a short timeout so slow-server tests stay fast
pub fn test_config() -> ExtractorConfig {
    ExtractorConfig {
        request_timeout_ms: 500,
        ..ExtractorConfig::default()
    }
}
