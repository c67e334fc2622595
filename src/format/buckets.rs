//! Refereed / non-refereed partitions and their scratch files

use super::line::DisplayLine;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Header describing the reload key bindings
pub const BUCKET_HEADER: &str =
    "ctrl-a: all entries | ctrl-f: non-refereed only | ctrl-r: refereed only";

/// Bracket pairs fzf accepts around an action argument, in preference order
const ACTION_DELIMITERS: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('<', '>'),
    ('~', '~'),
    ('!', '!'),
    ('@', '@'),
    ('#', '#'),
    ('$', '$'),
    ('%', '%'),
    ('^', '^'),
    ('&', '&'),
    ('*', '*'),
    (';', ';'),
    ('|', '|'),
];

/// Quote `path` for `sh`, escaping embedded single quotes
fn shell_quote(path: &Path) -> String {
    format!("'{}'", path.display().to_string().replace('\'', r"'\''"))
}

/// `key:reload(cmd)` with brackets that do not occur in `cmd`
///
/// Falls back to the unbracketed `key:reload:cmd` form, which fzf only
/// accepts as the last action of a `--bind` value.
fn reload_binding(key: &str, command: &str) -> String {
    ACTION_DELIMITERS
        .iter()
        .find(|(_, close)| !command.contains(*close))
        .map_or_else(
            || format!("{key}:reload:{command}"),
            |(open, close)| format!("{key}:reload{open}{command}{close}"),
        )
}

/// Well-known scratch files the selector reloads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchFiles {
    pub all: PathBuf,
    pub nonrefereed: PathBuf,
    pub refereed: PathBuf,
}

impl ScratchFiles {
    /// Scratch file locations inside `dir`
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            all: dir.join("ads_all.input"),
            nonrefereed: dir.join("ads_nonrefereed.input"),
            refereed: dir.join("ads_refereed.input"),
        }
    }

    /// Key bindings that swap the candidate list to one of the buckets
    #[must_use]
    pub fn reload_bindings(&self) -> Vec<String> {
        [
            ("ctrl-a", &self.all),
            ("ctrl-f", &self.nonrefereed),
            ("ctrl-r", &self.refereed),
        ]
        .into_iter()
        .map(|(key, path)| reload_binding(key, &format!("cat {}", shell_quote(path))))
        .collect()
    }
}

/// Display lines split by refereed status
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    pub all: Vec<DisplayLine>,
    pub refereed: Vec<DisplayLine>,
    pub nonrefereed: Vec<DisplayLine>,
}

impl Buckets {
    /// Partition lines, keeping their order within every bucket
    #[must_use]
    pub fn partition(lines: Vec<DisplayLine>) -> Self {
        let (refereed, nonrefereed): (Vec<_>, Vec<_>) =
            lines.iter().cloned().partition(DisplayLine::is_refereed);

        Self {
            all: lines,
            refereed,
            nonrefereed,
        }
    }

    /// Overwrite each scratch file with its bucket, one line per record
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if a file cannot be created or written.
    pub fn write(&self, files: &ScratchFiles) -> io::Result<()> {
        for (path, lines) in [
            (&files.all, &self.all),
            (&files.nonrefereed, &self.nonrefereed),
            (&files.refereed, &self.refereed),
        ] {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut writer = BufWriter::new(File::create(path)?);
            for line in lines {
                writer.write_all(line.as_str().as_bytes())?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
            debug!(path = %path.display(), lines = lines.len(), "wrote scratch file");
        }
        Ok(())
    }
}
