//! Output files and their lifecycle.
//!
//! Each output is written to a `.part` sibling, synced, and only then renamed over the
//! final name. Both temp files are complete before the first rename, so a failed run
//! leaves earlier outputs as they were.

use crate::error::WriteError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `version.txt` → `version.txt.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Final locations of the two artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub blocklist: PathBuf,
    pub version: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, blocklist_file: &str, version_file: &str) -> Self {
        Self {
            blocklist: dir.join(blocklist_file),
            version: dir.join(version_file),
        }
    }
}

/// Serializes the blocklist: header lines, one blank line, then rules. Every line ends in `\n`.
pub fn write_blocklist<W: Write>(out: &mut W, header: &[String], rules: &[String]) -> std::io::Result<()> {
    for line in header {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    for rule in rules {
        writeln!(out, "{}", rule)?;
    }
    Ok(())
}

/// A fully written, synced temp file waiting to be renamed into place.
struct Staged {
    temp: PathBuf,
    target: PathBuf,
}

impl Staged {
    /// Renames into place. On failure the temp file is removed.
    fn commit(self) -> Result<(), WriteError> {
        std::fs::rename(&self.temp, &self.target).map_err(|source| {
            discard(&self.temp);
            WriteError::Rename {
                from: self.temp.clone(),
                to: self.target.clone(),
                source,
            }
        })
    }
}

/// Writes `target.part` via `fill`, flushes and syncs it. The handle is closed before return.
fn stage<F>(target: &Path, fill: F) -> Result<Staged, WriteError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let temp = temp_path(target);
    let file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp)
        .map_err(|source| WriteError::Create {
            path: temp.clone(),
            source,
        })?;

    let mut out = BufWriter::new(file);
    let written = fill(&mut out)
        .and_then(|()| out.flush())
        .and_then(|()| out.get_ref().sync_all());
    drop(out);

    if let Err(source) = written {
        discard(&temp);
        return Err(WriteError::Write { path: temp, source });
    }

    Ok(Staged {
        temp,
        target: target.to_path_buf(),
    })
}

fn discard(temp: &Path) {
    if let Err(e) = std::fs::remove_file(temp) {
        tracing::debug!(path = %temp.display(), error = %e, "could not remove temp file");
    }
}

/// Writes the blocklist and the version file.
///
/// `version` is written as-is with no trailing newline.
pub fn write_outputs(
    paths: &OutputPaths,
    header: &[String],
    rules: &[String],
    version: &str,
) -> Result<(), WriteError> {
    let blocklist = stage(&paths.blocklist, |out| write_blocklist(out, header, rules))?;
    let version_file = match stage(&paths.version, |out| out.write_all(version.as_bytes())) {
        Ok(staged) => staged,
        Err(e) => {
            discard(&blocklist.temp);
            return Err(e);
        }
    };

    if let Err(e) = blocklist.commit() {
        discard(&version_file.temp);
        return Err(e);
    }
    tracing::info!(path = %paths.blocklist.display(), rules = rules.len(), "blocklist written");
    version_file.commit()?;
    tracing::info!(path = %paths.version.display(), "version file written");
    Ok(())
}
