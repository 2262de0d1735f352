use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, oracle::value_objects::OracleRequest};

/// Boundary to the generative model that does the actual nutritional reasoning.
///
/// Implementations return the raw response text untouched; shaping and
/// validation belong to the normalizers.
#[cfg_attr(test, mockall::automock)]
pub trait OracleClient: Send + Sync {
    fn submit(
        &self,
        request: OracleRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
