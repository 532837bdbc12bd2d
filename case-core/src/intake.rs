//! Evidence file intake: extension allow-list, filename sanitization, and
//! writes into the configured storage directory

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::error::{CaseError, Result};

/// File extensions accepted for evidence uploads
static ALLOWED_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["png", "jpg", "jpeg", "gif", "mp4", "mov", "avi", "pdf", "txt", "doc", "docx"]
        .into_iter()
        .collect()
});

/// Windows device names that must never become a stored basename
const RESERVED_NAMES: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Default request body cap: 50 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Extension of a filename: the substring after the last `.`, lowercased
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, extension)| extension.to_ascii_lowercase())
}

/// Whether the filename carries an allow-listed extension
pub fn allowed_file(name: &str) -> bool {
    file_extension(name).is_some_and(|extension| ALLOWED_EXTENSIONS.contains(extension.as_str()))
}

/// Collapse a client-supplied filename to a safe basename: any path the
/// client smuggled in is dropped, null bytes and control characters are
/// removed, spaces become underscores, and everything outside
/// `[A-Za-z0-9._-]` is discarded. Names that sanitize to nothing, or to a
/// reserved device name, are refused.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let mut cleaned = String::with_capacity(base.len());
    for ch in base.chars() {
        match ch {
            c if c.is_ascii_alphanumeric() => cleaned.push(c),
            '.' | '-' | '_' => cleaned.push(ch),
            ' ' => cleaned.push('_'),
            _ => {}
        }
    }
    // Leading/trailing dots would produce hidden files or "..".
    let cleaned = cleaned.trim_matches('.').to_string();

    if cleaned.is_empty() {
        return Err(CaseError::InvalidFilename { name: name.to_string() });
    }
    let stem = cleaned.split('.').next().unwrap_or(&cleaned);
    if RESERVED_NAMES.contains(&stem.to_ascii_lowercase().as_str()) {
        return Err(CaseError::InvalidFilename { name: name.to_string() });
    }
    Ok(cleaned)
}

/// An accepted upload: the opaque on-disk name and the sanitized name shown
/// to users
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StoredFile {
    pub stored_name: String,
    pub display_name: String,
}

/// Writes accepted evidence files into a storage directory under
/// collision-resistant names
#[derive(Debug, Clone)]
pub struct FileIntake {
    storage_dir: PathBuf,
    max_bytes: u64,
}

impl FileIntake {
    #[must_use]
    pub fn new(storage_dir: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self { storage_dir: storage_dir.into(), max_bytes }
    }

    #[must_use]
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Create the storage directory if it does not exist yet
    pub async fn ensure_storage_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.storage_dir).await?;
        Ok(())
    }

    /// Validate and persist one uploaded file. The extension check and the
    /// size cap both run before any bytes reach the disk. The stored name is
    /// a random 128-bit hex token, an underscore, and the sanitized display
    /// name, so concurrent uploads never collide.
    pub async fn save(&self, client_name: &str, bytes: &[u8]) -> Result<StoredFile> {
        let extension = file_extension(client_name).unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(extension.as_str()) {
            return Err(CaseError::UnsupportedFileType { extension });
        }
        if bytes.len() as u64 > self.max_bytes {
            return Err(CaseError::PayloadTooLarge { limit_bytes: self.max_bytes });
        }

        let display_name = sanitize_filename(client_name)?;
        let stored_name = format!("{}_{display_name}", Uuid::new_v4().simple());
        fs::write(self.storage_dir.join(&stored_name), bytes).await?;
        info!(stored = %stored_name, size = bytes.len(), "evidence file stored");

        Ok(StoredFile { stored_name, display_name })
    }

    /// Read a stored file back for verbatim serving. The stored name is an
    /// opaque token; anything resembling a path is refused outright.
    pub async fn open(&self, stored_name: &str) -> Result<Vec<u8>> {
        if stored_name.contains(['/', '\\']) || stored_name.contains("..") {
            return Err(CaseError::NotFound { resource: "Stored file".to_string() });
        }
        match fs::read(self.storage_dir.join(stored_name)).await {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(CaseError::NotFound { resource: "Stored file".to_string() })
            }
            Err(err) => Err(err.into()),
        }
    }
}
