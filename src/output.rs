use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    ranker::Ranking,
};

/// One decimal pid per line in rank order. An empty ranking is an empty string.
pub fn serialize(ranking: &Ranking) -> String {
    ranking
        .entries
        .iter()
        .map(|p| format!("{}\n", p.pid))
        .collect()
}

/// Replace `path` with `contents` so that readers see either the old file or the
/// complete new one. On failure the target is left as it was.
///
/// An existing file keeps its permissions, and a symlink keeps pointing at
/// the file that gets replaced.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let to_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let target = resolve_link(path).map_err(to_err)?;
    let tmp = temp_sibling(&target).map_err(to_err)?;

    let res = write_and_rename(&tmp, &target, contents);
    if res.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    res.map_err(to_err)
}

fn write_and_rename(tmp: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let file = File::create(tmp)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    if let Ok(meta) = fs::metadata(path) {
        file.set_permissions(meta.permissions())?;
    }
    file.sync_all()?;
    fs::rename(tmp, path)
}

///follow symlinks so the rename replaces the file they point to, not the link
fn resolve_link(path: &Path) -> std::io::Result<PathBuf> {
    let mut target = path.to_path_buf();
    for _ in 0..40 {
        match fs::symlink_metadata(&target) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&target)?;
                target = match target.parent() {
                    Some(dir) => dir.join(link),
                    None => link,
                };
            }
            _ => return Ok(target),
        }
    }
    Err(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        "too many levels of symbolic links",
    ))
}

///temp file must live in the same directory for rename to be atomic
fn temp_sibling(path: &Path) -> std::io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let tmp_name = format!(".{}.{}.tmp", name.to_string_lossy(), std::process::id());
    Ok(path.with_file_name(tmp_name))
}
