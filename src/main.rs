//! sessiongate: credential check, signed session tokens, and a bearer-token guard.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod identity;
pub mod password;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod token;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = config::AuthConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "refusing to start");
        e
    })?;
    let state = state::build_state(&config);
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    console::print_banner();
    tracing::info!(?config, "starting sessiongate on {}", addr);
    console::print_startup(&addr, config.expires_in().num_seconds());

    server::run(state, &addr).await?;
    Ok(())
}
