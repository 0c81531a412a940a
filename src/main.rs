use std::path::Path;

use relfetch::{fetch_with_retry, stamp_manifest, RequestOptions};
use tracing_subscriber::EnvFilter;

/// Well-known location of the published release descriptor.
const DESCRIPTOR_URL: &str =
    "https://raw.githubusercontent.com/neuralforgeone/relfetch/master/publish/version.json";

/// Manifest amended with the fetched version, relative to the project root.
const MANIFEST_PATH: &str = "package.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("relfetch=info")),
        )
        .init();

    let descriptor = fetch_with_retry(DESCRIPTOR_URL, RequestOptions::default())
        .await?
        .into_text();
    let version = stamp_manifest(Path::new(MANIFEST_PATH), &descriptor).await?;
    tracing::info!(%version, "manifest updated");
    Ok(())
}
