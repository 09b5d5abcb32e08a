// Application state shared by the handlers

use std::sync::Arc;

use super::alerts::HeaderUtil;
use crate::candidats::store::CandidatStore;

/// Application state: the persistence port and the alert header builder
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CandidatStore>,
    pub alerts: HeaderUtil,
}

impl AppState {
    pub fn new(store: Arc<dyn CandidatStore>, alerts: HeaderUtil) -> Self {
        Self { store, alerts }
    }
}
