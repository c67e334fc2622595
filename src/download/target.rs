//! Deterministic download paths

use std::path::{Path, PathBuf};

/// Where one source of one record is stored
///
/// The filename is `{bibcode}_{kind}.pdf`, where `&` and spaces are dropped
/// from the bibcode and `kind` is the source name up to its first `_`
/// (`PUB_PDF` becomes `PUB`). The same record and source always map to the
/// same file, which is what makes repeat downloads free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    path: PathBuf,
}

impl DownloadTarget {
    #[must_use]
    pub fn new(dir: &Path, bibcode: &str, source: &str) -> Self {
        Self {
            path: dir.join(file_name(bibcode, source)),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if a previous download already produced this file
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

fn file_name(bibcode: &str, source: &str) -> String {
    let bibcode: String = bibcode.chars().filter(|c| !matches!(c, '&' | ' ')).collect();
    let kind = source.split('_').next().unwrap_or(source);
    format!("{bibcode}_{kind}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publisher_pdf_name() {
        let target = DownloadTarget::new(Path::new("/tmp"), "2020ApJ...900..123S", "PUB_PDF");
        assert_eq!(target.path(), Path::new("/tmp/2020ApJ...900..123S_PUB.pdf"));
    }

    #[test]
    fn test_ampersand_and_space_are_dropped() {
        let target = DownloadTarget::new(Path::new("/d"), "2019A&A...623A..34 ", "EPRINT_PDF");
        assert_eq!(target.path(), Path::new("/d/2019AA...623A..34_EPRINT.pdf"));
    }

    #[test]
    fn test_source_without_underscore_is_kept_whole() {
        let target = DownloadTarget::new(Path::new("/d"), "X", "ADSSCAN");
        assert_eq!(target.path(), Path::new("/d/X_ADSSCAN.pdf"));
    }

    #[test]
    fn test_same_inputs_same_path() {
        let a = DownloadTarget::new(Path::new("/d"), "B", "PUB_PDF");
        let b = DownloadTarget::new(Path::new("/d"), "B", "PUB_PDF");
        assert_eq!(a, b);
        assert!(!a.exists());
    }
}
