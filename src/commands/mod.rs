//! Backend Command Wrappers
//!
//! Typed bindings to the HTTP API, organized by domain.

mod control;
mod dashboard;
mod novel;

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::error::ApiResult;
use crate::transport::{ApiRequest, Transport};

pub use novel::export_url;

/// Typed client over a [`Transport`]; cheap to clone
#[derive(Clone)]
pub struct Api {
    transport: Rc<dyn Transport>,
}

impl Api {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let value = self.transport.send(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn execute(&self, request: ApiRequest) -> ApiResult<()> {
        self.transport.send(request.discard_body()).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{ControlAction, NovelCreate};
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use futures::executor::block_on;
    use serde_json::json;

    fn api(mock: &Rc<MockTransport>) -> Api {
        Api::new(mock.clone())
    }

    #[test]
    fn logs_request_carries_limit() {
        let mock = Rc::new(MockTransport::new());
        mock.respond("/logs?limit=50", json!([]));
        let logs = block_on(api(&mock).logs(50)).unwrap();
        assert!(logs.is_empty());
        assert_eq!(mock.requests()[0].path, "/logs?limit=50");
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        let mock = Rc::new(MockTransport::new());
        mock.respond("/control/state", json!({"running": "yes"}));
        let err = block_on(api(&mock).scheduler_state()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn status_errors_pass_through() {
        let mock = Rc::new(MockTransport::new());
        mock.fail("/novels/9/generate", ApiError::RequestFailed { status: 400 });
        let err = block_on(api(&mock).generate_next_chapter(9)).unwrap_err();
        assert_eq!(err, ApiError::RequestFailed { status: 400 });
    }

    #[test]
    fn mutations_discard_body_and_send_json() {
        let mock = Rc::new(MockTransport::new());
        mock.respond("/control", json!(null));
        mock.respond("/novels", json!(null));
        mock.respond("/novels/3", json!(null));
        let api = api(&mock);

        block_on(api.control(ControlAction::Pause)).unwrap();
        block_on(api.create_novel(&NovelCreate {
            title: "T".into(),
            genre: "科幻".into(),
            description: None,
            target_chapter_count: 10,
        }))
        .unwrap();
        block_on(api.delete_novel(3)).unwrap();

        let requests = mock.requests();
        assert!(requests.iter().all(|r| r.discard_body));
        assert_eq!(requests[0].body, Some(json!({"action": "pause"})));
        assert_eq!(
            requests[1].body,
            Some(json!({"title": "T", "genre": "科幻", "description": null, "target_chapter_count": 10}))
        );
        assert_eq!(requests[2].method, Method::Delete);
        assert_eq!(requests[2].path, "/novels/3");
    }
}
