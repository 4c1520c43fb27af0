//! PDF exporter port - best-effort binary export with a guaranteed
//! fallback.

use thiserror::Error;

use crate::domain::contract::ContractDocument;

use super::template_renderer::RenderedContract;

/// Port for producing a PDF from a rendered contract.
///
/// # Contract
///
/// Export is best effort: when `export` fails, callers degrade to
/// `fallback`, which must always succeed and must contain at least the
/// contract id and vessel name. The operator always receives a
/// downloadable artifact.
pub trait PdfExporter: Send + Sync {
    /// Produces the full contract PDF.
    fn export(
        &self,
        document: &ContractDocument,
        rendered: &RenderedContract,
    ) -> Result<Vec<u8>, ExportError>;

    /// Produces the minimal fallback PDF. Infallible by design.
    fn fallback(&self, document: &ContractDocument) -> Vec<u8>;
}

/// Errors that can occur during PDF export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// The document could not be laid out.
    #[error("PDF layout failed: {0}")]
    LayoutFailed(String),

    /// The PDF bytes could not be written.
    #[error("PDF write failed: {0}")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_exporter_is_object_safe() {
        fn check<T: PdfExporter + ?Sized>() {}
        check::<dyn PdfExporter>();
    }

    #[test]
    fn export_error_displays_reason() {
        let err = ExportError::WriteFailed("stream closed".to_string());
        assert!(err.to_string().contains("stream closed"));
    }
}
