//! Test doubles for the transport and the browser shell.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::shell::BrowserShell;
use crate::transport::{ApiRequest, Transport};

enum Reply {
    Ready(ApiResult<Value>),
    Gate(oneshot::Receiver<ApiResult<Value>>),
}

/// Scripted transport keyed by request path.
///
/// The last ready reply of a path is sticky; gated replies are consumed once.
/// Unknown paths answer 404.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<String, VecDeque<Reply>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, value: Value) {
        self.push(path, Reply::Ready(Ok(value)));
    }

    pub fn fail(&self, path: &str, error: ApiError) {
        self.push(path, Reply::Ready(Err(error)));
    }

    /// Reply stays pending until the returned sender fires
    pub fn gate(&self, path: &str) -> oneshot::Sender<ApiResult<Value>> {
        let (tx, rx) = oneshot::channel();
        self.push(path, Reply::Gate(rx));
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, path: &str) -> usize {
        self.requests.borrow().iter().filter(|r| r.path == path).count()
    }

    fn push(&self, path: &str, reply: Reply) {
        self.routes
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    fn next_reply(&self, path: &str) -> Reply {
        let mut routes = self.routes.borrow_mut();
        let Some(queue) = routes.get_mut(path) else {
            return Reply::Ready(Err(ApiError::RequestFailed { status: 404 }));
        };
        let sticky = queue.len() == 1 && matches!(queue.front(), Some(Reply::Ready(_)));
        if sticky {
            if let Some(Reply::Ready(result)) = queue.front() {
                return Reply::Ready(result.clone());
            }
        }
        queue
            .pop_front()
            .unwrap_or(Reply::Ready(Err(ApiError::RequestFailed { status: 404 })))
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);
        match self.next_reply(&path) {
            Reply::Ready(result) => result,
            Reply::Gate(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".into()))),
        }
    }
}

/// Records dialogs instead of showing them
pub struct MockShell {
    pub alerts: RefCell<Vec<String>>,
    pub confirms: RefCell<Vec<String>>,
    pub opened: RefCell<Vec<String>>,
    pub confirm_answer: Cell<bool>,
}

impl MockShell {
    pub fn new() -> Self {
        Self {
            alerts: RefCell::default(),
            confirms: RefCell::default(),
            opened: RefCell::default(),
            confirm_answer: Cell::new(true),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl BrowserShell for MockShell {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn open_tab(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
