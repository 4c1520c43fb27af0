//! Template renderer port - typed contract-to-HTML conversion.
//!
//! The domain depends on this trait; adapters provide the rendering. The
//! renderer consumes the typed `ContractDocument`, so every field the
//! template references exists at compile time - a missing field is caught
//! at assembly, not at render time.

use thiserror::Error;

use crate::domain::contract::ContractDocument;

/// A rendered contract ready for display, download, or PDF export.
#[derive(Debug, Clone)]
pub struct RenderedContract {
    pub html: String,
    /// Suggested filename stem, e.g. "contract_AB12CD34_v1.0".
    pub filename_stem: String,
}

/// Port for rendering a contract document to HTML.
pub trait TemplateRenderer: Send + Sync {
    /// Renders the document. Implementations are pure over the document
    /// contents.
    fn render(&self, document: &ContractDocument) -> Result<RenderedContract, RenderError>;
}

/// Errors that can occur during rendering.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// The template itself is malformed.
    #[error("Template error: {0}")]
    Template(String),

    /// The document cannot be represented in the output format.
    #[error("Unrenderable document: {0}")]
    UnrenderableDocument(String),
}
