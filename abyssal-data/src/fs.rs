//! Capability-based file helpers built on `cap-std` and `camino`.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing UTF-8 path for reading using ambient authority.
///
/// # Errors
/// Propagates the I/O error raised while opening the file.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a file, creating missing parent directories first.
///
/// # Errors
/// Propagates I/O errors from directory creation or file creation.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let file_name = file_name(path)?;
    let parent = parent_or_current(path);
    fs_utf8::Dir::create_ambient_dir_all(parent, ambient_authority())?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.create(file_name)
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
/// Propagates the underlying I/O error, including `NotFound` when the path
/// or its parent directory is missing.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let file_name = file_name(path)?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent_or_current(path), ambient_authority())?;
    dir.metadata(file_name).map(|meta| meta.is_file())
}

fn file_name(path: &Utf8Path) -> io::Result<&str> {
    path.file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))
}

fn parent_or_current(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}
