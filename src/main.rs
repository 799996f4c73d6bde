use anyhow::Context;
use coursehub::docs::ApiDoc;
use coursehub_config::{MediaConfig, load_dotenv};
use tracing::info;
use utoipa::OpenApi;

/// Print the OpenAPI document of every representation to stdout.
fn main() -> anyhow::Result<()> {
    load_dotenv();
    coursehub_observability::init_basic_console_logging();

    let media = MediaConfig::from_env();
    info!(
        media_url = media.media_url.as_deref().unwrap_or("<none>"),
        schemes = ?media.absolute_url_schemes,
        "Media configuration loaded"
    );

    let document = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to render OpenAPI document")?;
    println!("{}", document);

    Ok(())
}
