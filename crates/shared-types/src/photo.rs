//! # Photo Resources
//!
//! The image handed to the issuance pipeline alongside candidate fields.
//!
//! A `Captured` photo owns a transient file produced by the capture
//! collaborator. Dropping the resource deletes that file, so every exit path
//! of a request (issued, duplicate, failed) releases it the same way.

use std::fmt;
use std::path::Path;
use tempfile::TempPath;

/// An image supplied for one issuance request.
pub enum PhotoResource {
    /// Raw encoded image bytes (JPEG, PNG).
    Bytes(Vec<u8>),
    /// A caller-owned file. Never deleted by this system.
    Path(std::path::PathBuf),
    /// A transient capture. The file is deleted when this value is dropped.
    Captured(TempPath),
}

impl PhotoResource {
    /// Filesystem location of the image, if it lives on disk.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PhotoResource::Bytes(_) => None,
            PhotoResource::Path(path) => Some(path.as_path()),
            PhotoResource::Captured(temp) => Some(&**temp),
        }
    }

    /// Whether this resource owns a file that is removed on drop.
    pub fn is_transient(&self) -> bool {
        matches!(self, PhotoResource::Captured(_))
    }

    /// Whether the image can currently be read.
    ///
    /// A path that no longer exists counts as unavailable.
    pub fn is_available(&self) -> bool {
        match self {
            PhotoResource::Bytes(bytes) => !bytes.is_empty(),
            PhotoResource::Path(_) | PhotoResource::Captured(_) => {
                self.path().is_some_and(Path::is_file)
            }
        }
    }
}

impl fmt::Debug for PhotoResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoResource::Bytes(bytes) => write!(f, "PhotoResource::Bytes({} bytes)", bytes.len()),
            PhotoResource::Path(path) => write!(f, "PhotoResource::Path({})", path.display()),
            PhotoResource::Captured(temp) => {
                write!(f, "PhotoResource::Captured({})", temp.display())
            }
        }
    }
}
