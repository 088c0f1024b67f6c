//! Shared filesystem helpers built on `cap-std` and `camino`.
//!
//! Catalog and state files are read and written through ambient-authority
//! capability handles so every path stays UTF-8 end to end.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path for reading using ambient authority.
///
/// # Errors
/// Propagates the I/O error raised while opening the file, including
/// `NotFound` when it does not exist.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Resolve an ambient directory for the given path and return the directory with the file name.
///
/// # Errors
/// Fails when `path` has no file name or its parent directory cannot be
/// opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Replace the contents of `path`, creating the file and its parent
/// directories when missing.
///
/// # Errors
/// Propagates failures from directory creation and from the write itself.
pub fn write_utf8_file(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    dir.write(name.as_str(), contents)
}

/// Create any missing parent directories of `path`.
///
/// The nearest existing ancestor is opened as an ambient directory and the
/// remainder is created beneath it, so absolute and relative paths behave
/// alike.
///
/// # Errors
/// Propagates failures from opening the ancestor or creating the missing
/// components. Returns `NotFound` when no ancestor exists at all.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) else {
        return Ok(());
    };
    for ancestor in parent.ancestors() {
        let base = if ancestor.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            ancestor
        };
        match fs_utf8::Dir::open_ambient_dir(base, ambient_authority()) {
            Ok(dir) => {
                let missing = parent.strip_prefix(ancestor).map_err(io::Error::other)?;
                if missing.as_str().is_empty() {
                    return Ok(());
                }
                return dir.create_dir_all(missing);
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no existing ancestor directory for {parent}"),
    ))
}

/// Return whether a path exists and is a regular file using capability-based IO.
///
/// # Errors
/// Returns `NotFound` when the path or its parent is missing, and other I/O
/// errors unchanged.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}
