//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the media directory exists so uploads and `/media` serving work.
pub async fn ensure_media_root(media_root: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(media_root).await {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => return Err(anyhow::anyhow!("{media_root} exists but is not a directory")),
        Err(_) => warn!(%media_root, "media directory not found; creating it"),
    }
    tokio::fs::create_dir_all(media_root)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {media_root}: {e}"))?;
    info!(%media_root, "media directory created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_media_root() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("site_cms_media_{}", std::process::id()));
        let path = dir.to_string_lossy().to_string();
        let _ = tokio::fs::remove_dir_all(&dir).await;

        ensure_media_root(&path).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        // second call is a no-op
        ensure_media_root(&path).await?;

        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }
}
