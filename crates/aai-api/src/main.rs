use aai_api::config::{ApiConfig, LogFormat};
use aai_scoring::all_instruments;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match config.log_format {
        // Structured JSON logging for CloudWatch
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }

    // Refuse to start with a malformed instrument table.
    for instrument in all_instruments() {
        instrument.check()?;
        tracing::debug!(instrument = %instrument.id, "instrument descriptor ok");
    }

    let app = aai_api::app(&config);

    match config.listen_addr {
        Some(addr) => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!("listening on {addr}");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}
