use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";

/// Application configuration and constants
#[derive(Debug, Clone)]
pub struct Config {
    pub pages_dir: Arc<PathBuf>,
    pub template_dir: Arc<PathBuf>,
    pub port: u16,
    pub host: String,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            pages_dir: Arc::new(PathBuf::from(".")),
            template_dir: Arc::new(PathBuf::from(".")),
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        pages_dir: PathBuf,
        template_dir: PathBuf,
        port: Option<u16>,
        host: Option<String>,
    ) -> Self {
        Self {
            pages_dir: Arc::new(pages_dir),
            template_dir: Arc::new(template_dir),
            port: port.unwrap_or(DEFAULT_PORT),
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        }
    }

    /// Build configuration from `WIKI_*` environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let pages_dir = std::env::var("WIKI_DIR").ok().map(PathBuf::from);
        let template_dir = std::env::var("WIKI_TEMPLATE_DIR").ok().map(PathBuf::from);
        let port = std::env::var("WIKI_PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok());
        let host = std::env::var("WIKI_HOST").ok();

        Self::with_custom(
            pages_dir.unwrap_or_else(|| PathBuf::from(".")),
            template_dir.unwrap_or_else(|| PathBuf::from(".")),
            port,
            host,
        )
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        let ip = self
            .host
            .parse::<std::net::IpAddr>()
            .unwrap_or(std::net::IpAddr::from([0, 0, 0, 0]));
        std::net::SocketAddr::new(ip, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serve_working_directory_on_8080() {
        let config = Config::new();
        assert_eq!(config.pages_dir.as_path(), std::path::Path::new("."));
        assert_eq!(config.template_dir.as_path(), std::path::Path::new("."));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn custom_host_and_port() {
        let config = Config::with_custom(
            PathBuf::from("pages"),
            PathBuf::from("templates"),
            Some(3000),
            Some("127.0.0.1".to_string()),
        );
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
