//! Saving meme images to disk

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use memegen_core::prelude::*;
use url::Url;

/// Fetches image references and writes them into one directory
#[derive(Debug, Clone)]
pub struct Downloader {
    client: reqwest::Client,
    dir: PathBuf,
}

impl Downloader {
    pub fn new(client: reqwest::Client, dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            dir: dir.into(),
        }
    }

    /// Download `reference` and store it as `filename`.
    ///
    /// http(s) references are fetched, base64 `data:` references are decoded
    /// in place. Any other scheme is rejected.
    pub async fn save(&self, reference: &str, filename: &str) -> Result<PathBuf> {
        let url = Url::parse(reference)
            .map_err(|e| Error::download(format!("invalid image reference: {e}")))?;
        let bytes = match url.scheme() {
            "http" | "https" => self.fetch(url).await?,
            "data" => decode_data_reference(reference)?,
            other => {
                return Err(Error::download(format!("unsupported scheme '{other}'")));
            }
        };

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(filename);
        tokio::fs::write(&path, &bytes).await?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }

    async fn fetch(&self, url: Url) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::download(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::download(format!("HTTP {}", status.as_u16())));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::download(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Decode a `data:<mime>;base64,<payload>` reference
fn decode_data_reference(reference: &str) -> Result<Vec<u8>> {
    let (header, payload) = reference
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .ok_or_else(|| Error::download("malformed data reference"))?;
    if !header.ends_with(";base64") {
        return Err(Error::download("data reference is not base64 encoded"));
    }

    let payload: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(payload)
        .map_err(|e| Error::download(format!("invalid base64 payload: {e}")))
}
