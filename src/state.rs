// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::AuthKeys;
use crate::store::Store;

/// Shared application state.
///
/// The store is the only mutable state shared between requests; per-request
/// work holds the lock for a single operation, mirroring per-document write
/// atomicity. Auth keys are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub auth: Arc<AuthKeys>,
}

impl AppState {
    pub fn new(store: Store, auth: AuthKeys) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            auth: Arc::new(auth),
        }
    }

    /// Fresh state with an empty store and keys derived from `secret`.
    pub fn with_secret(secret: &[u8]) -> Self {
        Self::new(Store::new(), AuthKeys::from_secret(secret))
    }
}
