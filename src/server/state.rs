use axum::extract::FromRef;

use crate::corpus::Corpus;
use std::sync::Arc;

use super::ServerConfig;

/// The corpus is never mutated after startup, so handlers share it without
/// any lock.
pub type GuardedCorpus = Arc<Corpus>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub corpus: GuardedCorpus,
}

impl FromRef<ServerState> for GuardedCorpus {
    fn from_ref(input: &ServerState) -> Self {
        input.corpus.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
