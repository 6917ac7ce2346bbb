//! Dashboard Commands
//!
//! Read-only endpoints driven by the poll cycles.

use super::Api;
use crate::error::ApiResult;
use crate::models::{DashboardSnapshot, LogEntry};
use crate::transport::ApiRequest;

impl Api {
    pub async fn dashboard(&self) -> ApiResult<DashboardSnapshot> {
        self.fetch(ApiRequest::get("/dashboard")).await
    }

    /// Latest `limit` creation log lines, in server order
    pub async fn logs(&self, limit: u32) -> ApiResult<Vec<LogEntry>> {
        self.fetch(ApiRequest::get(format!("/logs?limit={}", limit))).await
    }
}
