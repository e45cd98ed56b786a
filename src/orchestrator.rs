//! Top-level redaction flow.

use crate::annotate::AnnotationBuilder;
use crate::client::{AccessorSelector, RenditionBackend};
use crate::error::Result;
use crate::model::{
    AlterContentRequest, DocumentId, DocumentLayoutNode, RedactionAnnotation, SearchOptions,
};
use crate::walker::LayoutWalker;
use std::fs;
use std::path::PathBuf;

/// MIME type declared on upload. The backend sniffs the real container
/// format itself; this matches what its upload endpoint expects.
const UPLOAD_MIME_TYPE: &str = "application/pdf";

/// Configuration for one redaction run. Replaces any notion of process-wide
/// client or pattern state: everything the flow needs is passed in here.
#[derive(Debug, Clone)]
pub struct RedactionOptions {
    /// Search pattern (regular expression, matched case- and
    /// accent-insensitively by the backend).
    pub pattern: String,

    /// Path of the source document to redact.
    pub source: PathBuf,

    /// Directory redacted output files are written to.
    pub output_dir: PathBuf,

    /// Identity recorded as annotation author.
    pub creator: String,
}

impl RedactionOptions {
    /// Create options for redacting `source` with `pattern`. Output goes to
    /// the current directory and annotations are authored as `admin`.
    pub fn new(pattern: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            pattern: pattern.into(),
            source: source.into(),
            output_dir: PathBuf::from("."),
            creator: "admin".to_string(),
        }
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the annotation author.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }
}

/// One redacted output document.
#[derive(Debug, Clone)]
pub struct RedactedFile {
    /// Source document the annotations were burned into.
    pub document_id: DocumentId,

    /// Where the redacted content was written.
    pub path: PathBuf,

    /// Number of annotations burned in.
    pub annotation_count: usize,
}

/// Remote document ids owed an eviction.
///
/// Ids are registered as soon as the corresponding remote document exists
/// (upload, alter-content) and released in one sweep on every exit path of
/// the flow, success or failure. Eviction failures are logged and never
/// replace the error that ended the run.
#[derive(Debug, Default)]
pub struct EvictionScope {
    ids: Vec<DocumentId>,
}

impl EvictionScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a remote document for eviction.
    pub fn register(&mut self, id: DocumentId) {
        self.ids.push(id);
    }

    /// Ids currently registered.
    pub fn ids(&self) -> &[DocumentId] {
        &self.ids
    }

    /// Best-effort eviction of every registered id, in registration order.
    pub fn evict_all<B: RenditionBackend>(self, backend: &B) {
        for id in &self.ids {
            if let Err(e) = backend.evict(id) {
                log::warn!("Failed to evict document {}: {}", id, e);
            }
        }
    }
}

/// Annotations accumulated for one source document during traversal.
struct DocumentAnnotations {
    document_id: DocumentId,
    title: String,
    annotations: Vec<RedactionAnnotation>,
}

/// Drives the full redaction flow against a rendition backend.
///
/// The flow is sequential and blocking: upload the source, walk its layout,
/// search every page of every leaf document in increasing page order, build
/// redact annotations per matched range, submit one alter-content request
/// per source document that matched, persist the re-rendered output, and
/// evict all remote state.
pub struct RedactionOrchestrator<B: RenditionBackend> {
    backend: B,
    options: RedactionOptions,
}

impl<B: RenditionBackend> RedactionOrchestrator<B> {
    /// Create an orchestrator for `backend` with the given options.
    pub fn new(backend: B, options: RedactionOptions) -> Self {
        Self { backend, options }
    }

    /// Run the redaction flow.
    ///
    /// Returns one [`RedactedFile`] per source document that produced at
    /// least one annotation. Any failure aborts the run and propagates
    /// unchanged, after remote documents created so far have been evicted.
    pub fn redact(&self) -> Result<Vec<RedactedFile>> {
        let mut scope = EvictionScope::new();
        let result = self.run(&mut scope);
        scope.evict_all(&self.backend);
        result
    }

    fn run(&self, scope: &mut EvictionScope) -> Result<Vec<RedactedFile>> {
        let content = fs::read(&self.options.source)?;
        let filename = self
            .options
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        let source_id = DocumentId::generate();
        log::debug!("Uploading {} as document {}", filename, source_id);
        self.backend
            .upload_document(&source_id, UPLOAD_MIME_TYPE, &filename, &content)?;
        scope.register(source_id.clone());

        let layout = self.backend.document_layout(&source_id)?;
        let per_document = self.collect_annotations(&layout)?;

        let mut outputs = Vec::new();
        for entry in per_document {
            if entry.annotations.is_empty() {
                log::debug!("No matches in document {}, skipping", entry.document_id);
                continue;
            }
            outputs.push(self.alter_and_persist(entry, scope)?);
        }
        Ok(outputs)
    }

    /// Walk the layout, searching every page and accumulating annotations
    /// per leaf document id. Documents keep traversal order.
    fn collect_annotations(&self, layout: &DocumentLayoutNode) -> Result<Vec<DocumentAnnotations>> {
        let builder = AnnotationBuilder::new(&self.options.creator);
        let search = SearchOptions::redaction(&self.options.pattern);
        let mut per_document: Vec<DocumentAnnotations> = Vec::new();

        LayoutWalker::new(&self.backend).traverse(layout, &mut |page| {
            log::debug!(
                "Searching {} pages of '{}' ({})",
                page.page_count,
                page.title,
                page.document_id
            );
            let mut annotations = Vec::new();
            for page_index in 0..page.page_count {
                let result = self
                    .backend
                    .search_page(&page.document_id, &search, page_index)?;
                annotations.extend(builder.build_for_page(page_index, &result.search_results));
            }

            match per_document
                .iter_mut()
                .find(|d| d.document_id == page.document_id)
            {
                Some(entry) => entry.annotations.append(&mut annotations),
                None => per_document.push(DocumentAnnotations {
                    document_id: page.document_id.clone(),
                    title: page.title.clone(),
                    annotations,
                }),
            }
            Ok(())
        })?;

        Ok(per_document)
    }

    /// Submit one alter-content request for a document's annotations and
    /// write the re-rendered content to the output directory.
    fn alter_and_persist(
        &self,
        entry: DocumentAnnotations,
        scope: &mut EvictionScope,
    ) -> Result<RedactedFile> {
        let annotation_count = entry.annotations.len();
        log::debug!(
            "Altering document {} with {} annotations",
            entry.document_id,
            annotation_count
        );
        let request = AlterContentRequest::render_annotations(entry.annotations);
        let source_ids = [entry.document_id.clone()];
        let altered_id = self.backend.alter_content(&source_ids, &request)?;
        scope.register(altered_id.clone());

        let bytes = self
            .backend
            .fetch_document(&altered_id, AccessorSelector::Initial)?;
        fs::create_dir_all(&self.options.output_dir)?;
        let path = self
            .options
            .output_dir
            .join(output_file_name(&entry.title, &entry.document_id));
        fs::write(&path, bytes)?;

        Ok(RedactedFile {
            document_id: entry.document_id,
            path,
            annotation_count,
        })
    }
}

/// Deterministic output name for a redacted document. Falls back to the
/// document id when the backend reports no title.
fn output_file_name(title: &str, document_id: &DocumentId) -> String {
    let stem: &str = if title.is_empty() {
        document_id.as_str()
    } else {
        title
    };
    format!("redacted-{}.pdf", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_output_file_name() {
        let id = DocumentId::new("abc-123");
        assert_eq!(output_file_name("invoice", &id), "redacted-invoice.pdf");
        assert_eq!(output_file_name("", &id), "redacted-abc-123.pdf");
    }

    #[test]
    fn test_options_defaults() {
        let options = RedactionOptions::new("[0-9]+", "in.zip");
        assert_eq!(options.creator, "admin");
        assert_eq!(options.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_options_builder() {
        let options = RedactionOptions::new("[0-9]+", "in.zip")
            .with_output_dir("/tmp/out")
            .with_creator("auditor");
        assert_eq!(options.output_dir, Path::new("/tmp/out"));
        assert_eq!(options.creator, "auditor");
    }

    #[test]
    fn test_eviction_scope_keeps_registration_order() {
        let mut scope = EvictionScope::new();
        scope.register(DocumentId::new("a"));
        scope.register(DocumentId::new("b"));
        let ids: Vec<_> = scope.ids().iter().map(|i| i.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
