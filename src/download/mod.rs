//! Download manager
//!
//! Retrieves article files over HTTP into a per-record cache path. A file
//! that already exists is never fetched again.

mod error;
mod manager;
mod target;

pub use error::DownloadError;
pub use manager::{CHUNK_SIZE, DownloadManager, FetchStatus, human_size};
pub use target::DownloadTarget;
