//! Scheduler Control Commands

use serde_json::json;

use super::Api;
use crate::error::ApiResult;
use crate::models::{ConfigUpdate, ControlAction, SchedulerState};
use crate::transport::ApiRequest;

impl Api {
    pub async fn scheduler_state(&self) -> ApiResult<SchedulerState> {
        self.fetch(ApiRequest::get("/control/state")).await
    }

    pub async fn control(&self, action: ControlAction) -> ApiResult<()> {
        let body = json!({ "action": action });
        self.execute(ApiRequest::post("/control", Some(body))).await
    }

    /// Push runtime settings; unset fields stay as they are
    pub async fn update_config(&self, update: &ConfigUpdate) -> ApiResult<()> {
        let body = serde_json::to_value(update)?;
        self.execute(ApiRequest::post("/config", Some(body))).await
    }
}
