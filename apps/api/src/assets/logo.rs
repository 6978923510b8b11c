//! Best-effort logo fetching for report headers.
#![allow(dead_code)]
//!
//! The fetch is bounded by a fixed timeout and resolved once, before any
//! page is drawn, since header/footer painting is synchronous and repeated many
//! times afterwards. Every failure path degrades to `None`, which the chrome
//! renders as a text header instead.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::surface::{RasterFormat, ReportImage};

/// Pluggable logo backend. Carried in `AppState` as `Arc<dyn LogoSource>`.
#[async_trait]
pub trait LogoSource: Send + Sync {
    /// Returns the logo, or `None` when it is unavailable for any reason.
    async fn fetch(&self) -> Option<ReportImage>;
}

/// Fetches the logo over HTTP with a hard timeout.
pub struct HttpLogoSource {
    client: reqwest::Client,
    url: Option<String>,
    timeout: Duration,
}

impl HttpLogoSource {
    pub fn new(client: reqwest::Client, url: Option<String>, timeout: Duration) -> Self {
        HttpLogoSource {
            client,
            url,
            timeout,
        }
    }
}

#[async_trait]
impl LogoSource for HttpLogoSource {
    async fn fetch(&self) -> Option<ReportImage> {
        let url = self.url.as_ref()?;

        let response = match tokio::time::timeout(self.timeout, self.client.get(url).send()).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!(url, error = %e, "logo fetch failed; using text header");
                return None;
            }
            Err(_) => {
                warn!(url, timeout_ms = self.timeout.as_millis() as u64, "logo fetch timed out");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(url, status = %response.status(), "logo fetch returned non-success");
            return None;
        }

        let bytes = match tokio::time::timeout(self.timeout, response.bytes()).await {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => {
                warn!(url, error = %e, "logo body read failed");
                return None;
            }
            Err(_) => {
                warn!(url, "logo body read timed out");
                return None;
            }
        };

        decode_logo(&bytes)
    }
}

/// A source with no logo configured; reports always use the text header.
pub struct NoLogo;

#[async_trait]
impl LogoSource for NoLogo {
    async fn fetch(&self) -> Option<ReportImage> {
        None
    }
}

/// Sniffs the container format and probes pixel dimensions. Unknown formats
/// and undecodable payloads degrade to `None`.
pub fn decode_logo(bytes: &[u8]) -> Option<ReportImage> {
    let format = sniff_format(bytes)?;
    match image::load_from_memory(bytes) {
        Ok(decoded) => Some(ReportImage {
            format,
            data: bytes.to_vec(),
            pixel_width: decoded.width(),
            pixel_height: decoded.height(),
        }),
        Err(e) => {
            warn!(error = %e, "logo bytes could not be decoded");
            None
        }
    }
}

fn sniff_format(bytes: &[u8]) -> Option<RasterFormat> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        Some(RasterFormat::Png)
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(RasterFormat::Jpeg)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_png_magic() {
        assert_eq!(
            sniff_format(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]),
            Some(RasterFormat::Png)
        );
    }

    #[test]
    fn test_sniff_jpeg_magic() {
        assert_eq!(sniff_format(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(RasterFormat::Jpeg));
    }

    #[test]
    fn test_sniff_unknown_is_none() {
        assert_eq!(sniff_format(b"GIF89a"), None);
        assert_eq!(sniff_format(&[]), None);
    }

    #[test]
    fn test_decode_garbage_is_none() {
        // Valid JPEG magic but no decodable payload behind it.
        assert!(decode_logo(&[0xFF, 0xD8, 0xFF, 0x00, 0x01]).is_none());
    }

    #[tokio::test]
    async fn test_no_logo_source_yields_none() {
        assert!(NoLogo.fetch().await.is_none());
    }

    #[tokio::test]
    async fn test_http_source_without_url_yields_none() {
        let source = HttpLogoSource::new(
            reqwest::Client::new(),
            None,
            Duration::from_secs(1),
        );
        assert!(source.fetch().await.is_none());
    }
}
