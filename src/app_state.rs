use crate::cli::CommandLineArgs;
use crate::dataset::Dataset;
use crate::queries::QueryEngine;

use std::sync::Arc;

/// Shared application state passed to each query request handler.
pub struct AppState {
    /// Query engine over the dataset loaded at startup.
    pub engine: QueryEngine,
}

impl AppState {
    /// Create and return an [AppState], loading the dataset named by the arguments.
    ///
    /// A dataset that fails to load is replaced by an empty one.
    pub fn new(args: &CommandLineArgs) -> Self {
        Self::with_dataset(Dataset::load(&args.data_file))
    }

    /// Create and return an [AppState] over an already loaded dataset.
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            engine: QueryEngine::new(dataset),
        }
    }
}

/// AppState wrapped in an Atomic Reference Count (Arc) to allow multiple references.
pub type SharedAppState = Arc<AppState>;
