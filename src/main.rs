use tokio::net::TcpListener;

use pagewiki::logger::Logger;
use pagewiki::{build_router, Config, WikiError};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if let Err(e) = Logger::init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env();
    if !config.pages_dir.is_dir() {
        log::error!("Pages directory {:?} does not exist", config.pages_dir);
        return Err(WikiError::NotFound);
    }

    let app = build_router(&config);

    let addr = config.socket_addr();
    log::info!(
        "Wiki listening on http://{} (pages: {:?}, templates: {:?})",
        addr,
        config.pages_dir,
        config.template_dir
    );
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(WikiError::from)
}
