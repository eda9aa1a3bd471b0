//! Lead store client.
//!
//! The contact form only needs one capability from the outside world:
//! append rows to the `contact_submissions` table. [`LeadStore`] is that
//! seam; [`SupabaseStore`] talks to the Supabase REST (PostgREST) API and
//! tests substitute an in-memory store.

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

use crate::config::{StoreConfig, LEADS_TABLE};
use crate::types::{ConfigError, LeadSubmission, StoreError, StoreResult};

/// Destination for lead submissions.
pub trait LeadStore {
    /// Insert `records` as one batch.
    fn insert<'a>(&'a self, records: &'a [LeadSubmission]) -> LocalBoxFuture<'a, StoreResult<()>>;
}

/// Supabase table client using the anon key.
#[derive(Clone, Debug)]
pub struct SupabaseStore {
    config: StoreConfig,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    async fn insert_rows(&self, records: &[LeadSubmission]) -> StoreResult<()> {
        let url = self.config.table_endpoint(LEADS_TABLE);
        let bearer = format!("Bearer {}", self.config.anon_key);

        let request = Request::post(&url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &bearer)
            .header("Prefer", "return=minimal")
            .json(records)
            .map_err(|e| StoreError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Rejected {
                status: response.status(),
                body,
            });
        }

        Ok(())
    }
}

impl LeadStore for SupabaseStore {
    fn insert<'a>(&'a self, records: &'a [LeadSubmission]) -> LocalBoxFuture<'a, StoreResult<()>> {
        Box::pin(self.insert_rows(records))
    }
}

/// Stand-in used when no store was configured at build time.
///
/// The page still renders; every submission fails with
/// [`StoreError::NotConfigured`].
#[derive(Clone, Debug)]
pub struct UnconfiguredStore {
    reason: ConfigError,
}

impl UnconfiguredStore {
    pub fn new(reason: ConfigError) -> Self {
        Self { reason }
    }
}

impl LeadStore for UnconfiguredStore {
    fn insert<'a>(&'a self, _records: &'a [LeadSubmission]) -> LocalBoxFuture<'a, StoreResult<()>> {
        let err = StoreError::from(self.reason.clone());
        Box::pin(async move { Err(err) })
    }
}
