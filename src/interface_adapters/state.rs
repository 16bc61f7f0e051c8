use crate::domain::SwapiProvider;
use crate::use_cases::LookupService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> lets the real client or a test double be injected.
    pub lookup: LookupService<Arc<dyn SwapiProvider>>,
}

impl AppState {
    pub fn new(provider: Arc<dyn SwapiProvider>) -> Self {
        Self {
            lookup: LookupService::new(provider),
        }
    }
}
