use std::sync::Arc;

use glovesite::services::mailer::{Mailer, ResendMailer};
use glovesite::{config, routes, state};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Mail transport is optional: the site still serves, the estimate relay answers 500.
    let mailer: Option<Arc<dyn Mailer>> = match config.resend_api_key.as_deref() {
        Some(key) => {
            tracing::info!(to = %config.estimate_to_email, "estimate relay enabled");
            let mailer: Arc<dyn Mailer> = Arc::new(ResendMailer::new(key));
            Some(mailer)
        }
        None => {
            tracing::warn!("RESEND_API_KEY not set, estimate relay disabled");
            None
        }
    };

    let port = config.port;
    let website_dir = config.website_dir.display().to_string();
    let state = state::AppState::new(config, mailer);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %website_dir, "glovesite listening");
    axum::serve(listener, app).await.expect("server failed");
}
