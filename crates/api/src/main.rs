use hypershop_api::app::{self, Mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hypershop_observability::init();

    let mode = Mode::from_env();
    let app = app::build_app(mode)?;

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!(%mode, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
