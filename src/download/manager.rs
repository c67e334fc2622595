//! Streaming HTTP retrieval with a progress bar

use super::error::DownloadError;
use super::target::DownloadTarget;
use byte_unit::{Byte, UnitType};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::time::Duration;
use tracing::{debug, info};

/// Body is copied to disk in chunks of this many bytes
pub const CHUNK_SIZE: usize = 1024;

const BAR_TEMPLATE: &str = "{bar:40.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

/// What `fetch` had to do to produce the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// The file was already on disk; nothing was transferred
    Cached,
    /// The file was transferred
    Downloaded {
        /// Body bytes written
        bytes: u64,
    },
}

/// Downloads article files into their deterministic cache paths
#[derive(Debug, Clone)]
pub struct DownloadManager {
    client: Client,
    show_progress: bool,
}

impl DownloadManager {
    /// Create a manager whose connections time out after `connect_timeout`
    ///
    /// The transfer itself is not time-limited, so large files can finish.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Client`] if the HTTP client cannot be built.
    pub fn new(connect_timeout: Duration, show_progress: bool) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(None::<Duration>)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DownloadError::Client)?;

        Ok(Self {
            client,
            show_progress,
        })
    }

    /// Make sure `target` exists, downloading it from `url` if needed
    ///
    /// An existing file is reused without touching the network. The status
    /// is checked before the file is created, so an HTTP error leaves no
    /// file behind.
    ///
    /// # Errors
    ///
    /// Returns a [`DownloadError`] on network failure, a non-success
    /// status, or a file system error.
    pub fn fetch(&self, url: &str, target: &DownloadTarget) -> Result<FetchStatus, DownloadError> {
        let path = target.path();
        if target.exists() {
            info!(path = %path.display(), "download cache hit");
            return Ok(FetchStatus::Cached);
        }
        debug!(url, path = %path.display(), "download cache miss");

        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| DownloadError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DownloadError::io(parent, e))?;
        }

        let total = response.content_length().unwrap_or(0);
        let bar = self.progress_bar(total);

        let mut file = File::create(path).map_err(|e| DownloadError::io(path, e))?;
        let mut buf = [0u8; CHUNK_SIZE];
        let mut written: u64 = 0;
        loop {
            let n = response
                .read(&mut buf)
                .map_err(|e| DownloadError::io(path, e))?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])
                .map_err(|e| DownloadError::io(path, e))?;
            written += n as u64;
            bar.inc(n as u64);
        }
        file.flush().map_err(|e| DownloadError::io(path, e))?;
        bar.finish_and_clear();

        info!(path = %path.display(), bytes = written, "download complete");
        Ok(FetchStatus::Downloaded { bytes: written })
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    }
}

/// Human-readable size, e.g. `1.5 KiB`
#[must_use]
pub fn human_size(bytes: u64) -> String {
    Byte::from_u64(bytes)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> DownloadManager {
        DownloadManager::new(Duration::from_secs(5), false).unwrap()
    }

    #[test]
    fn test_second_fetch_is_served_from_disk() {
        let mut server = mockito::Server::new();
        let body = vec![7u8; 3000];
        let mock = server
            .mock("GET", "/link_gateway/B/PUB_PDF")
            .with_status(200)
            .with_body(&body)
            .expect(1)
            .create();

        let dir = TempDir::new().unwrap();
        let target = DownloadTarget::new(dir.path(), "B", "PUB_PDF");
        let url = format!("{}/link_gateway/B/PUB_PDF", server.url());

        let first = manager().fetch(&url, &target).unwrap();
        let second = manager().fetch(&url, &target).unwrap();

        assert_eq!(first, FetchStatus::Downloaded { bytes: 3000 });
        assert_eq!(second, FetchStatus::Cached);
        assert_eq!(fs::read(target.path()).unwrap(), body);
        mock.assert();
    }

    #[test]
    fn test_http_error_creates_no_file() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/missing").with_status(404).create();

        let dir = TempDir::new().unwrap();
        let target = DownloadTarget::new(dir.path(), "B", "EPRINT_PDF");
        let url = format!("{}/missing", server.url());

        let err = manager().fetch(&url, &target).unwrap_err();

        assert!(matches!(err, DownloadError::HttpStatus { status: 404, .. }));
        assert!(!target.path().exists());
    }

    #[test]
    fn test_missing_download_dir_is_created() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/pdf").with_body("%PDF-1.4").create();

        let dir = TempDir::new().unwrap();
        let target = DownloadTarget::new(&dir.path().join("a").join("b"), "B", "PUB_PDF");

        manager().fetch(&format!("{}/pdf", server.url()), &target).unwrap();

        assert_eq!(fs::read_to_string(target.path()).unwrap(), "%PDF-1.4");
    }

    #[test]
    fn test_interrupted_body_leaves_partial_file() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/cut")
            .with_status(200)
            .with_chunked_body(|w| {
                w.write_all(b"%PDF-1.7 truncated")?;
                w.flush()?;
                // Let the headers and first chunk reach the client
                std::thread::sleep(Duration::from_millis(200));
                Err(std::io::Error::other("connection dropped"))
            })
            .create();

        let dir = TempDir::new().unwrap();
        let target = DownloadTarget::new(dir.path(), "B", "PUB_PDF");

        let result = manager().fetch(&format!("{}/cut", server.url()), &target);

        assert!(result.is_err());
        assert!(target.path().exists());
    }

    #[test]
    fn test_human_size() {
        let size = human_size(2048);
        assert!(size.starts_with('2'));
        assert!(size.ends_with("KiB"));
    }
}
