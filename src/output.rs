/*!
 * Serialization of the seasons document.
 */

use log::debug;
use std::path::Path;

use crate::errors::WriteError;
use crate::file_utils::FileManager;
use crate::models::SeasonsDocument;

/// Render the document as two-space indented JSON.
///
/// Keys follow struct field order and non-ASCII text is written literally.
pub fn render_document(document: &SeasonsDocument) -> Result<String, WriteError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Render and atomically write the document to `path`
///
/// # Errors
/// Returns `WriteError::Io` when the destination cannot be written, for
/// example because its directory does not exist.
pub fn write_document<P: AsRef<Path>>(document: &SeasonsDocument, path: P) -> Result<(), WriteError> {
    let path = path.as_ref();
    let json = render_document(document)?;

    FileManager::write_atomic(path, &json).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} bytes to {:?}", json.len(), path);
    Ok(())
}
