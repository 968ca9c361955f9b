//! The trait collaborators program against.
//!
//! Demos and the CLI take a `&dyn ResponsesApi` so they can be
//! exercised against a mock instead of the hosted endpoint.

use crate::core_types::request::ResponseRequest;
use crate::core_types::response::NormalizedResponse;
use crate::error::ResponsesResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponsesApi: Send + Sync {
    /// Issue one request and normalize the result.
    ///
    /// Implementations make at most one outbound call and never retry.
    async fn create_response(&self, request: &ResponseRequest)
        -> ResponsesResult<NormalizedResponse>;

    /// Short provider identifier used in logs.
    fn provider_name(&self) -> &'static str;
}
