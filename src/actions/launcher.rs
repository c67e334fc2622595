//! Opening URLs and files with the desktop's default handler

use std::ffi::OsStr;
use std::io;
use tracing::debug;

/// Something that can hand a URL or file path to the user's environment
pub trait Launcher {
    /// Open `target` (a URL or a local path)
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if no handler could be started.
    fn open(&self, target: &OsStr) -> io::Result<()>;
}

/// Launcher backed by the platform opener (`xdg-open`, `open`, `start`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, target: &OsStr) -> io::Result<()> {
        debug!(target = %target.to_string_lossy(), "opening with system handler");
        open::that(target)
    }
}
