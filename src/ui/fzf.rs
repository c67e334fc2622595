//! fzf subprocess adapter
//!
//! Implements [`FuzzyFinder`] by running an external selector with piped
//! stdin/stdout. Candidates are written as UTF-8, one per line, flushing
//! after each; stdin is closed before waiting so the selector sees
//! end-of-input. The selector draws on the terminal itself, so stderr is
//! inherited.

use super::error::{Result, UiError};
use super::traits::{FinderConfig, FuzzyFinder};
use super::types::FinderResult;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Selector backed by an fzf-compatible executable
#[derive(Debug, Clone)]
pub struct FzfFinder {
    program: PathBuf,
}

impl FzfFinder {
    /// Use an already-resolved program path
    #[must_use]
    pub const fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Resolve `name` on `PATH`
    ///
    /// # Errors
    ///
    /// Returns [`UiError::SelectorNotFound`] if no executable matches.
    pub fn locate(name: &str) -> Result<Self> {
        find_executable(name)
            .map(Self::new)
            .ok_or_else(|| UiError::SelectorNotFound(name.to_string()))
    }

    /// Command-line arguments for a configuration
    #[must_use]
    pub fn build_args(config: &FinderConfig) -> Vec<String> {
        let mut args = Vec::new();

        if config.ansi {
            args.push("--ansi".to_string());
        }
        if let Some(preview) = &config.preview_config {
            args.push(format!("--preview={}", preview.command));
        }
        if config.no_hscroll {
            args.push("--no-hscroll".to_string());
        }
        if let Some(preview) = &config.preview_config {
            args.push("--preview-window".to_string());
            args.push(preview.window());
        }
        // One flag per binding, so an unbracketed action stays last
        for bind in &config.bind {
            args.push("--bind".to_string());
            args.push(bind.clone());
        }
        if let Some(header) = &config.header {
            args.push("--header".to_string());
            args.push(header.clone());
        }

        args
    }
}

impl FuzzyFinder for FzfFinder {
    fn run(&self, config: FinderConfig) -> Result<FinderResult> {
        let args = Self::build_args(&config);
        debug!(program = %self.program.display(), ?args, items = config.items.len(), "launching selector");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| UiError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = write_candidates(&mut stdin, &config.items) {
                if e.kind() == io::ErrorKind::BrokenPipe {
                    debug!("selector closed its input early");
                } else {
                    // Reap the child before reporting; its exit status is irrelevant here
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e.into());
                }
            }
            // stdin dropped here: the selector now sees end-of-input
        }

        let output = child.wait_with_output()?;
        debug!(status = ?output.status, bytes = output.stdout.len(), "selector exited");

        let stdout = String::from_utf8_lossy(&output.stdout);
        match stdout.lines().find(|l| !l.is_empty()) {
            Some(line) => Ok(FinderResult::selected(line)),
            None => {
                if !output.status.success() && output.status.code() != Some(130) {
                    warn!(status = ?output.status, "selector exited without a selection");
                }
                Ok(FinderResult::aborted())
            }
        }
    }
}

fn write_candidates(stdin: &mut impl Write, items: &[String]) -> io::Result<()> {
    for item in items {
        stdin.write_all(item.as_bytes())?;
        stdin.write_all(b"\n")?;
        stdin.flush()?;
    }
    Ok(())
}

/// Look up an executable the way a shell would
///
/// Names containing a path separator are checked directly; bare names are
/// searched in each `PATH` entry.
#[must_use]
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable_file(candidate).then(|| candidate.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .flat_map(|dir| executable_names(name).map(move |n| dir.join(n)))
        .find(|p| is_executable_file(p))
}

fn executable_names(name: &str) -> impl Iterator<Item = String> + '_ {
    let exts: Vec<String> = if cfg!(windows) {
        std::env::var_os("PATHEXT")
            .as_deref()
            .map(OsStr::to_string_lossy)
            .unwrap_or(".EXE;.CMD;.BAT".into())
            .split(';')
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };

    std::iter::once(name.to_string()).chain(exts.into_iter().map(move |ext| format!("{name}{ext}")))
}

fn is_executable_file(path: &Path) -> bool {
    let Ok(meta) = std::fs::metadata(path) else {
        return false;
    };
    if !meta.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        meta.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PreviewConfig;

    fn full_config(items: Vec<String>) -> FinderConfig {
        FinderConfig::new(items)
            .with_ansi(true)
            .with_no_hscroll(true)
            .with_preview(PreviewConfig {
                command: "echo {} | cut -d':' -f3-".into(),
                size: 1,
            })
            .with_binds(vec!["ctrl-a:reload(cat a)".into(), "ctrl-r:reload(cat r)".into()])
            .with_header("help".into())
    }

    #[test]
    fn test_build_args_full() {
        let args = FzfFinder::build_args(&full_config(vec![]));
        assert_eq!(
            args,
            vec![
                "--ansi",
                "--preview=echo {} | cut -d':' -f3-",
                "--no-hscroll",
                "--preview-window",
                "up,1",
                "--bind",
                "ctrl-a:reload(cat a)",
                "--bind",
                "ctrl-r:reload(cat r)",
                "--header",
                "help",
            ]
        );
    }

    #[test]
    fn test_build_args_minimal() {
        assert!(FzfFinder::build_args(&FinderConfig::new(vec![])).is_empty());
    }

    #[test]
    fn test_locate_missing_program() {
        let result = FzfFinder::locate("definitely-not-a-selector-7f3a9");
        assert!(matches!(result, Err(UiError::SelectorNotFound(_))));
    }

    #[cfg(unix)]
    mod subprocess {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        /// Write an executable shell script standing in for the selector
        fn fake_selector(dir: &TempDir, body: &str) -> PathBuf {
            let path = dir.path().join("fake-selector");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_first_output_line_is_selected() {
            let dir = TempDir::new().unwrap();
            let finder = FzfFinder::new(fake_selector(&dir, "sed -n 2p"));

            let result = finder
                .run(full_config(vec!["one:a:x".into(), "two:b:y".into(), "three:c:z".into()]))
                .unwrap();

            assert_eq!(result.selected.as_deref(), Some("two:b:y"));
        }

        #[test]
        fn test_empty_output_is_aborted() {
            let dir = TempDir::new().unwrap();
            let finder = FzfFinder::new(fake_selector(&dir, "cat > /dev/null; exit 130"));

            let result = finder.run(full_config(vec!["one:a:x".into()])).unwrap();

            assert!(result.is_aborted());
        }

        #[test]
        fn test_selector_closing_input_early_is_not_an_error() {
            let dir = TempDir::new().unwrap();
            let finder = FzfFinder::new(fake_selector(&dir, "head -n 1"));
            let items: Vec<String> = (0..20_000).map(|i| format!("{i}:x:y")).collect();

            let result = finder.run(FinderConfig::new(items)).unwrap();

            assert_eq!(result.selected.as_deref(), Some("0:x:y"));
        }

        #[test]
        fn test_candidates_arrive_as_utf8_lines() {
            let dir = TempDir::new().unwrap();
            let out = dir.path().join("received");
            let finder = FzfFinder::new(fake_selector(
                &dir,
                &format!("cat > '{}'", out.display()),
            ));

            let result = finder
                .run(FinderConfig::new(vec!["Ångström:é:ü".into(), "b:c:d".into()]))
                .unwrap();

            assert!(result.is_aborted());
            assert_eq!(fs::read_to_string(out).unwrap(), "Ångström:é:ü\nb:c:d\n");
        }

        #[test]
        fn test_find_executable_by_path() {
            let dir = TempDir::new().unwrap();
            let script = fake_selector(&dir, "true");
            assert_eq!(find_executable(script.to_str().unwrap()), Some(script));
        }

        #[test]
        fn test_find_executable_rejects_non_executable() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("plain");
            fs::write(&path, "data").unwrap();
            assert_eq!(find_executable(path.to_str().unwrap()), None);
        }
    }
}
