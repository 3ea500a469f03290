use std::sync::Arc;

use crate::store::Domain;

/// Shared application state.
///
/// The domain handle is built once at startup and is read-only afterwards,
/// so it is shared plainly behind an `Arc` with no lock. Anything transient
/// to one request (the query text, the requested count) travels with the
/// request instead of living here.
#[derive(Clone)]
pub struct AppState {
    pub domain: Arc<Domain>,
}

impl AppState {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain: Arc::new(domain),
        }
    }
}
