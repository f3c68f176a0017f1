use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "tcp://docker1.aws.server.tld:2376";

/// Seconds bollard waits on a request before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where the engine lives and the PEM files used to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerConfig {
    pub endpoint: String,
    pub ca_cert_path: PathBuf,
    pub client_cert_path: PathBuf,
    pub client_key_path: PathBuf,
    pub timeout_secs: u64,
}

impl Default for DockerConfig {
    fn default() -> Self {
        let cert_dir = default_cert_dir();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            ca_cert_path: cert_dir.join("ca.pem"),
            client_cert_path: cert_dir.join("cert.pem"),
            client_key_path: cert_dir.join("key.pem"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub service_name: String,
    pub otlp_endpoint: String,
    pub log_level: String,
    pub excluded_modules: Vec<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            service_name: env!("CARGO_PKG_NAME").to_string(),
            otlp_endpoint: "http://localhost:4317".to_string(),
            log_level: "warn".to_string(),
            excluded_modules: vec![
                "hyper".to_string(),
                "h2".to_string(),
                "tonic".to_string(),
                "rustls".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub docker: DockerConfig,
    pub telemetry: TelemetryConfig,
}

/// `~/.docker`, the directory the docker CLI keeps its TLS material in.
fn default_cert_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".docker"))
        .unwrap_or_else(|| PathBuf::from(".docker"))
}
