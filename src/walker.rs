//! Recursive traversal of document layout trees.

use crate::error::{Error, Result};
use crate::model::{DocumentId, DocumentLayoutNode, PageLayout};
use std::collections::HashSet;

/// Resolves a document id to its layout tree.
///
/// Implemented by the rendition backend client; traversal depends only on
/// this one operation so tests can substitute an in-memory resolver.
pub trait LayoutResolver {
    /// Fetch the layout of the document identified by `id`.
    fn document_layout(&self, id: &DocumentId) -> Result<DocumentLayoutNode>;
}

impl<T: LayoutResolver + ?Sized> LayoutResolver for &T {
    fn document_layout(&self, id: &DocumentId) -> Result<DocumentLayoutNode> {
        (**self).document_layout(id)
    }
}

/// Walks a layout tree and hands every leaf page to a visitor callback.
///
/// Dispatch is exhaustive over [`DocumentLayoutNode`]: containers are
/// descended depth-first in child order, references are re-fetched through
/// the resolver and recursed into, media subtrees are skipped, and pages are
/// visited exactly once. The first failure (resolver or visitor) aborts the
/// whole traversal; nothing is retried.
pub struct LayoutWalker<'a, R: LayoutResolver + ?Sized> {
    resolver: &'a R,
}

impl<'a, R: LayoutResolver + ?Sized> LayoutWalker<'a, R> {
    /// Create a walker resolving references through `resolver`.
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    /// Traverse `node`, invoking `on_page` for every leaf page.
    ///
    /// Reference targets are tracked along the active reference chain; a
    /// chain that re-enters a document it is currently resolving fails with
    /// [`Error::CyclicReference`] instead of recursing unboundedly. Sibling
    /// references to the same document are legal (the same sub-document
    /// archived twice) and each one re-fetches and re-visits its target.
    pub fn traverse<F>(&self, node: &DocumentLayoutNode, on_page: &mut F) -> Result<()>
    where
        F: FnMut(&PageLayout) -> Result<()>,
    {
        let mut resolving = HashSet::new();
        self.walk(node, on_page, &mut resolving)
    }

    fn walk<F>(
        &self,
        node: &DocumentLayoutNode,
        on_page: &mut F,
        resolving: &mut HashSet<DocumentId>,
    ) -> Result<()>
    where
        F: FnMut(&PageLayout) -> Result<()>,
    {
        match node {
            DocumentLayoutNode::Container { children } => {
                log::debug!("Descending into container with {} children", children.len());
                for child in children {
                    self.walk(child, on_page, resolving)?;
                }
                Ok(())
            }
            DocumentLayoutNode::Reference { target } => {
                if !resolving.insert(target.clone()) {
                    return Err(Error::CyclicReference(target.to_string()));
                }
                log::debug!("Resolving referenced document {}", target);
                let layout = self.resolver.document_layout(target)?;
                let result = self.walk(&layout, on_page, resolving);
                resolving.remove(target);
                result
            }
            DocumentLayoutNode::Media { kind } => {
                log::debug!("Skipping media node ({:?})", kind);
                Ok(())
            }
            DocumentLayoutNode::Page(page) => on_page(page),
        }
    }
}
