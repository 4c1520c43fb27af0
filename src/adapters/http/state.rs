//! Shared application state for the HTTP surface.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::handlers::{GenerateContractHandler, ListContractVersionsHandler};
use crate::domain::session::Workspace;
use crate::ports::{ContractStore, PdfExporter, TemplateRenderer};

/// Everything the HTTP handlers need.
///
/// The workspace sits behind one coarse lock: the tool assumes a single
/// active editor, and the lock only keeps the service sound if two
/// requests ever race.
#[derive(Clone)]
pub struct AppState {
    pub workspace: Arc<RwLock<Workspace>>,
    pub exporter: Arc<dyn PdfExporter>,
    pub store: Arc<dyn ContractStore>,
    pub generate_contract: Arc<GenerateContractHandler>,
    pub list_versions: Arc<ListContractVersionsHandler>,
}

impl AppState {
    /// Wires the state from the collaborator implementations.
    pub fn new(
        renderer: Arc<dyn TemplateRenderer>,
        exporter: Arc<dyn PdfExporter>,
        store: Arc<dyn ContractStore>,
    ) -> Self {
        Self {
            workspace: Arc::new(RwLock::new(Workspace::new())),
            generate_contract: Arc::new(GenerateContractHandler::new(
                renderer,
                exporter.clone(),
                store.clone(),
            )),
            list_versions: Arc::new(ListContractVersionsHandler::new(store.clone())),
            exporter,
            store,
        }
    }
}
