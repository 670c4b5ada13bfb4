//! ZIP packaging of the output tree.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Component, Path, PathBuf};

use chrono::NaiveDate;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::ArchiveError;

/// Result of a successful archive build.
#[derive(Debug, Clone)]
pub struct ArchiveSummary {
    /// Final location of the archive
    pub path: PathBuf,
    /// Entry names, `/`-separated and relative to the archived root
    pub entries: Vec<String>,
}

/// `<prefix>_<YYYY-MM-DD>.zip`
pub fn archive_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.zip", prefix, date.format("%Y-%m-%d"))
}

/// Archive `root` into `<root>/<prefix>_<today>.zip`.
///
/// Earlier archives with the same prefix at the top of `root` are left out
/// of the new one. A same-day archive is replaced.
pub fn archive_today(root: &Path, prefix: &str) -> Result<ArchiveSummary, ArchiveError> {
    let name = archive_file_name(prefix, chrono::Local::now().date_naive());
    let destination = root.join(&name);
    let stale_prefix = format!("{}_", prefix);

    build(root, &destination, |rel| {
        is_top_level(rel)
            && rel.to_str().is_some_and(|s| {
                s.starts_with(&stale_prefix) && s.ends_with(".zip")
            })
    })
}

/// Write every file under `root` into a deflated ZIP at `destination`.
///
/// Entries are named by their path relative to `root` and added in sorted
/// order. The file list is taken before anything is written, and the
/// destination itself is never included. The archive is assembled in a
/// staging file beside `root` and moved into place only once complete; on
/// any error the staging file is removed and nothing is left at
/// `destination`.
pub fn archive(root: &Path, destination: &Path) -> Result<ArchiveSummary, ArchiveError> {
    build(root, destination, |_| false)
}

fn build(
    root: &Path,
    destination: &Path,
    exclude: impl Fn(&Path) -> bool,
) -> Result<ArchiveSummary, ArchiveError> {
    if !root.is_dir() {
        return Err(ArchiveError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    collect_files(root, &mut files)?;
    files.sort();

    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        if same_file(&path, destination) {
            continue;
        }
        let rel = pathdiff::diff_paths(&path, root)
            .filter(|rel| !rel.starts_with(".."))
            .ok_or_else(|| ArchiveError::OutsideRoot(path.clone()))?;
        if exclude(&rel) {
            log::debug!("Leaving {} out of the archive", rel.display());
            continue;
        }
        entries.push((path, entry_name(&rel)));
    }

    let staging = staging_path(&root.canonicalize()?, destination);
    if let Err(e) = write_zip(&staging, &entries) {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }
    if let Err(e) = move_file(&staging, destination) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }

    log::info!(
        "Archived {} file(s) into {}",
        entries.len(),
        destination.display()
    );

    Ok(ArchiveSummary {
        path: destination.to_path_buf(),
        entries: entries.into_iter().map(|(_, name)| name).collect(),
    })
}

fn write_zip(path: &Path, entries: &[(PathBuf, String)]) -> Result<(), ArchiveError> {
    let file = File::create(path)?;
    let mut zip = zip::ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, name) in entries {
        zip.start_file(name.as_str(), options)?;
        let mut reader = BufReader::new(File::open(path)?);
        io::copy(&mut reader, &mut zip)?;
    }

    let mut writer = zip.finish()?;
    io::Write::flush(&mut writer)?;
    Ok(())
}

/// Recursively list regular files under `dir`.
fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else if path.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

/// ZIP entry name for a relative path: components joined with `/`.
pub(crate) fn entry_name(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn is_top_level(rel: &Path) -> bool {
    rel.components().count() == 1
}

/// Hidden sibling of `root` used while the archive is being written.
/// `root` must be absolute so the staging file never lands inside it.
fn staging_path(root: &Path, destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive.zip".to_string());
    let staging_name = format!(".{}.partial", name);
    match root.parent() {
        Some(parent) => parent.join(staging_name),
        None => std::env::temp_dir().join(staging_name),
    }
}

/// Rename, falling back to copy + delete across filesystems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
