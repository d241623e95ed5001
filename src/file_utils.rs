use anyhow::{Result, Context};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

// @module: File utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Replace a file's content atomically.
    ///
    /// The content goes to a temporary file in the destination directory,
    /// which is then renamed over the target. Readers see either the old file
    /// or the complete new one. The destination directory must exist.
    ///
    /// The target keeps its permissions; a new file gets `0o644` on unix.
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> std::io::Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;

        let permissions = match fs::metadata(path) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(_) => Self::new_file_permissions(),
        };
        if let Some(permissions) = permissions {
            temp.as_file().set_permissions(permissions)?;
        }

        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    // @returns: Mode for a freshly created output file (temp files start at 0600)
    #[cfg(unix)]
    fn new_file_permissions() -> Option<fs::Permissions> {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }

    #[cfg(not(unix))]
    fn new_file_permissions() -> Option<fs::Permissions> {
        None
    }
}
