use shared_types::ServiceConfig;
use std::path::Path;

/// Default location of the service config file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "config_service.json";

/// Path of the service config file: `SERVICE_CONFIG` if set, otherwise
/// `config_service.json`.
pub fn config_path() -> String {
    let _ = dotenvy::dotenv();
    std::env::var("SERVICE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Read and parse the service config file.
///
/// A missing file is not an error: defaults are used and a warning is
/// logged. A file that exists but cannot be read or parsed is an error, so
/// a typo in the config stops startup instead of silently being ignored.
pub fn load_service_config(path: impl AsRef<Path>) -> Result<ServiceConfig, String> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Service config not found, using defaults");
            return Ok(ServiceConfig::default());
        }
        Err(e) => {
            return Err(format!(
                "failed to open config file {}: {e}",
                path.display()
            ))
        }
    };

    let config: ServiceConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("failed to decode config file {}: {e}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        bind = %config.bind_addr(),
        count = config.count,
        version = %config.version,
        "Loaded service config"
    );
    Ok(config)
}
