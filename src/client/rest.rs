//! HTTP implementation of the rendition backend contract.

use super::{AccessorSelector, RenditionBackend};
use crate::error::{Error, Result};
use crate::model::{
    AlterContentRequest, DocumentId, DocumentLayoutNode, PageSearchResult, SearchOptions,
};
use crate::walker::LayoutResolver;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Blocking REST client for a rendition backend instance.
pub struct RestBackend {
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AlterContentBody<'a> {
    source_document_ids: &'a [DocumentId],
    description: &'a AlterContentRequest,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlteredDocument {
    document_id: DocumentId,
}

impl RestBackend {
    /// Create a client for the backend at `base_url`
    /// (e.g. `http://localhost:8761`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success status to an operation-specific error.
    fn check(
        response: reqwest::blocking::Response,
        on_failure: impl FnOnce(StatusCode) -> Error,
    ) -> Result<reqwest::blocking::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(on_failure(response.status()))
        }
    }
}

impl LayoutResolver for RestBackend {
    fn document_layout(&self, id: &DocumentId) -> Result<DocumentLayoutNode> {
        let response = self
            .client
            .get(self.url(&format!("/documents/{}/layout", id)))
            .send()?;
        let response = Self::check(response, |status| {
            Error::Resolution(format!("layout of {} returned {}", id, status))
        })?;
        Ok(response.json()?)
    }
}

impl RenditionBackend for RestBackend {
    fn upload_document(
        &self,
        id: &DocumentId,
        mime_type: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/documents/{}", id)))
            .query(&[("filename", filename)])
            .header(reqwest::header::CONTENT_TYPE, mime_type)
            .body(content.to_vec())
            .send()?;
        Self::check(response, |status| {
            Error::Upload(format!("upload of {} returned {}", filename, status))
        })?;
        Ok(())
    }

    fn search_page(
        &self,
        id: &DocumentId,
        options: &SearchOptions,
        page_index: u32,
    ) -> Result<PageSearchResult> {
        let response = self
            .client
            .post(self.url(&format!("/documents/{}/pages/{}/search", id, page_index)))
            .json(options)
            .send()?;
        let response = Self::check(response, |status| Error::Search {
            page: page_index,
            message: format!("backend returned {}", status),
        })?;
        Ok(response.json()?)
    }

    fn alter_content(
        &self,
        source_ids: &[DocumentId],
        request: &AlterContentRequest,
    ) -> Result<DocumentId> {
        let body = AlterContentBody {
            source_document_ids: source_ids,
            description: request,
        };
        let response = self
            .client
            .post(self.url("/documents/alter"))
            .json(&body)
            .send()?;
        let response = Self::check(response, |status| {
            Error::AlterContent(format!("backend returned {}", status))
        })?;
        let altered: AlteredDocument = response.json()?;
        Ok(altered.document_id)
    }

    fn fetch_document(&self, id: &DocumentId, selector: AccessorSelector) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.url(&format!("/documents/{}/content", id)))
            .query(&[("selector", selector.as_str())])
            .send()?;
        let response = Self::check(response, |status| {
            Error::Retrieval(format!("content of {} returned {}", id, status))
        })?;
        Ok(response.bytes()?.to_vec())
    }

    fn evict(&self, id: &DocumentId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/documents/{}", id)))
            .send()?;
        Self::check(response, |status| {
            Error::Transport(format!("evict of {} returned {}", id, status))
        })?;
        Ok(())
    }
}
