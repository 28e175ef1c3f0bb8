//! Hand-off of a record to an external "open file" action.

use serde::Serialize;

use crate::error::{DocshareError, DocshareResult};
use crate::hooks::FileProbe;
use crate::models::DocumentRecord;

/// What an external viewer needs to open a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenTarget {
    pub path: String,
    pub mime_type: &'static str,
}

/// Resolve the path and MIME type for opening `record`.
///
/// Fails with [`DocshareError::NotFound`] when the local file is gone.
pub fn open_target<P: FileProbe + ?Sized>(record: &DocumentRecord, probe: &P) -> DocshareResult<OpenTarget> {
    if !probe.exists(record.local_path()) {
        tracing::debug!(
            file_name = %record.file_name(),
            local_path = %record.local_path(),
            "Cannot open document: local file missing"
        );
        return Err(DocshareError::NotFound(record.local_path().to_string()));
    }

    Ok(OpenTarget {
        path: record.local_path().to_string(),
        mime_type: record.mime_type(),
    })
}
