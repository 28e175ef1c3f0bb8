use crate::traits::{ProbeError, ProbeResult};
use docshare_core::FileProbe;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Local filesystem probe
#[derive(Clone, Debug, Default)]
pub struct LocalFileProbe {
    base_path: Option<PathBuf>,
}

impl LocalFileProbe {
    /// Probe that takes every record path literally.
    pub fn new() -> Self {
        LocalFileProbe { base_path: None }
    }

    /// Probe that resolves relative record paths against `base_path`
    /// (e.g. "/data/user/0/app/files/documents").
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        LocalFileProbe {
            base_path: Some(base_path.into()),
        }
    }

    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    /// Filesystem path a record's `localPath` refers to.
    pub fn resolve(&self, local_path: &str) -> PathBuf {
        let path = Path::new(local_path);
        match &self.base_path {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Metadata for a regular file, following symlinks.
    pub fn metadata(&self, local_path: &str) -> ProbeResult<fs::Metadata> {
        let path = self.resolve(local_path);

        let metadata = fs::metadata(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProbeError::NotFound(path.display().to_string()),
            _ => ProbeError::IoError(e),
        })?;

        if !metadata.is_file() {
            return Err(ProbeError::NotAFile(path.display().to_string()));
        }

        Ok(metadata)
    }

    pub fn file_size(&self, local_path: &str) -> ProbeResult<u64> {
        Ok(self.metadata(local_path)?.len())
    }
}

impl FileProbe for LocalFileProbe {
    fn exists(&self, path: &str) -> bool {
        self.metadata(path).is_ok()
    }

    fn size(&self, path: &str) -> u64 {
        match self.file_size(path) {
            Ok(size) => size,
            Err(ProbeError::NotFound(resolved)) => {
                tracing::debug!(path = %resolved, "Document file missing");
                0
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Failed to read document size");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshare_core::{aggregate_with_probe, DocumentRecord};
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, len: usize) -> String {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&vec![b'x'; len]).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.pdf", 1234);
        let probe = LocalFileProbe::new();

        assert!(probe.exists(&path));
        assert_eq!(probe.size(&path), 1234);
        assert_eq!(probe.file_size(&path).unwrap(), 1234);
    }

    #[test]
    fn test_missing_file_is_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.pdf").to_string_lossy().into_owned();
        let probe = LocalFileProbe::new();

        assert!(!probe.exists(&path));
        assert_eq!(probe.size(&path), 0);
        assert!(matches!(probe.file_size(&path), Err(ProbeError::NotFound(_))));
    }

    #[test]
    fn test_directory_is_not_a_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_string_lossy().into_owned();
        let probe = LocalFileProbe::new();

        assert!(!probe.exists(&path));
        assert_eq!(probe.size(&path), 0);
        assert!(matches!(probe.metadata(&path), Err(ProbeError::NotAFile(_))));
    }

    #[test]
    fn test_relative_paths_resolve_against_base() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "notes.docx", 10);
        let probe = LocalFileProbe::with_base_path(dir.path());

        assert_eq!(probe.base_path(), Some(dir.path()));
        assert!(probe.exists("notes.docx"));
        assert_eq!(probe.size("notes.docx"), 10);
        assert!(!LocalFileProbe::new().exists("notes.docx"));
    }

    #[test]
    fn test_absolute_paths_ignore_base() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let path = write_file(&other, "x.png", 3);
        let probe = LocalFileProbe::with_base_path(dir.path());

        assert_eq!(probe.resolve(&path), PathBuf::from(&path));
        assert_eq!(probe.size(&path), 3);
    }

    #[test]
    fn test_stats_over_real_files() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.pdf", 1024 * 1024);
        let b = write_file(&dir, "b.png", 512 * 1024);
        let missing = dir.path().join("c.docx").to_string_lossy().into_owned();

        let records = vec![
            DocumentRecord::new("a.pdf", a, 1),
            DocumentRecord::new("b.png", b, 2),
            DocumentRecord::new("c.docx", missing, 3),
        ];
        let stats = aggregate_with_probe(&records, &LocalFileProbe::new());

        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_bytes, 1024 * 1024 + 512 * 1024);
        assert_eq!(stats.display_megabytes(), "1.5");
    }
}
