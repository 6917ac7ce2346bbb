//! Command Dispatcher
//!
//! Maps one user action to one mutating request. While the request is in
//! flight its control is marked busy in the store (disabled, progress
//! label); the mark is released when the [`BusyGuard`] drops, on every exit
//! path.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::{export_url, Api};
use crate::error::{ApiError, ApiResult};
use crate::models::{ConfigUpdate, ControlAction, NovelCreate};
use crate::poller::Poller;
use crate::shell::BrowserShell;
use crate::store::{AppStore, ViewModelStoreFields};

/// Identity of one interactive control; lockout is scoped to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Generate(u32),
    ViewChapters(u32),
    Delete(u32),
    Scheduler(ControlAction),
    CreateNovel,
    SaveSettings,
}

/// Failure category shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Generate,
    Delete,
    Create,
    Control,
    Settings,
}

impl CommandKind {
    pub fn failure_message(self) -> &'static str {
        match self {
            CommandKind::Generate => "生成失败，请查看日志。",
            CommandKind::Delete => "删除失败，请检查后端日志。",
            CommandKind::Create => "创建小说计划失败，请检查后端日志。",
            CommandKind::Control => "控制失败，请查看后台日志。",
            CommandKind::Settings => "更新运行参数失败，请检查后端日志。",
        }
    }

    fn success_message(self) -> Option<&'static str> {
        match self {
            CommandKind::Create => Some("小说计划已创建，后续将根据该设定开始创作。"),
            CommandKind::Settings => Some("运行参数已更新。"),
            _ => None,
        }
    }

    fn confirmation(self) -> Option<&'static str> {
        match self {
            CommandKind::Delete => Some("确定要删除这本小说及其所有章节和日志吗？该操作不可恢复。"),
            _ => None,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommandKind::Generate => "generate",
            CommandKind::Delete => "delete",
            CommandKind::Create => "create",
            CommandKind::Control => "control",
            CommandKind::Settings => "settings",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Completed,
    Failed(ApiError),
    /// Operator cancelled the confirmation; nothing was sent
    Declined,
    /// Same control already has a request in flight; nothing was sent
    Busy,
}

/// Scoped busy mark for one control
pub struct BusyGuard {
    store: AppStore,
    key: ControlKey,
}

impl BusyGuard {
    /// `None` if the control is already busy
    pub fn acquire(store: AppStore, key: ControlKey) -> Option<Self> {
        if store.in_flight().read_untracked().contains(&key) {
            return None;
        }
        store.in_flight().write().insert(key);
        Some(Self { store, key })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if let Some(mut in_flight) = self.store.in_flight().try_write() {
            in_flight.remove(&self.key);
        }
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    api: Api,
    store: AppStore,
    poller: Poller,
    shell: Rc<dyn BrowserShell>,
    api_base: String,
}

impl Dispatcher {
    pub fn new(
        api: Api,
        store: AppStore,
        poller: Poller,
        shell: Rc<dyn BrowserShell>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            api,
            store,
            poller,
            shell,
            api_base: api_base.into(),
        }
    }

    pub async fn generate(&self, novel_id: u32) -> CommandOutcome {
        self.dispatch(ControlKey::Generate(novel_id), CommandKind::Generate, |api| async move {
            api.generate_next_chapter(novel_id).await
        })
        .await
    }

    /// Asks for confirmation first
    pub async fn delete(&self, novel_id: u32) -> CommandOutcome {
        self.dispatch(ControlKey::Delete(novel_id), CommandKind::Delete, |api| async move {
            api.delete_novel(novel_id).await
        })
        .await
    }

    pub async fn create(&self, novel: NovelCreate) -> CommandOutcome {
        self.dispatch(ControlKey::CreateNovel, CommandKind::Create, |api| async move {
            api.create_novel(&novel).await
        })
        .await
    }

    /// Shared by start/pause/resume/stop
    pub async fn control(&self, action: ControlAction) -> CommandOutcome {
        self.dispatch(ControlKey::Scheduler(action), CommandKind::Control, |api| async move {
            api.control(action).await
        })
        .await
    }

    pub async fn save_settings(&self, update: ConfigUpdate) -> CommandOutcome {
        self.dispatch(ControlKey::SaveSettings, CommandKind::Settings, |api| async move {
            api.update_config(&update).await
        })
        .await
    }

    /// Export is a plain navigation; no lockout, no request of our own
    pub fn export(&self, novel_id: u32) {
        self.shell.open_tab(&export_url(&self.api_base, novel_id));
    }

    async fn dispatch<F, Fut>(&self, key: ControlKey, kind: CommandKind, request: F) -> CommandOutcome
    where
        F: FnOnce(Api) -> Fut,
        Fut: Future<Output = ApiResult<()>>,
    {
        if self.store.in_flight().read_untracked().contains(&key) {
            return CommandOutcome::Busy;
        }
        if let Some(prompt) = kind.confirmation() {
            if !self.shell.confirm(prompt) {
                return CommandOutcome::Declined;
            }
        }
        let Some(_busy) = BusyGuard::acquire(self.store, key) else {
            return CommandOutcome::Busy;
        };

        log::info!("{} command sent ({:?})", kind, key);
        match request(self.api.clone()).await {
            Ok(()) => {
                if let Some(message) = kind.success_message() {
                    self.shell.alert(message);
                }
                self.refresh_after(kind, true).await;
                CommandOutcome::Completed
            }
            Err(e) => {
                log::error!("{} command failed ({:?}): {}", kind, key, e);
                self.shell.alert(kind.failure_message());
                self.refresh_after(kind, false).await;
                CommandOutcome::Failed(e)
            }
        }
    }

    async fn refresh_after(&self, kind: CommandKind, succeeded: bool) {
        match kind {
            CommandKind::Control => {
                self.poller.refresh_scheduler().await;
            }
            CommandKind::Generate | CommandKind::Delete | CommandKind::Create if succeeded => {
                self.poller.refresh_dashboard().await;
                self.poller.refresh_logs().await;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::new_app_store;
    use crate::testing::{MockShell, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;
    use std::pin::pin;
    use std::task::{Context, Poll};

    struct Fixture {
        mock: Rc<MockTransport>,
        shell: Rc<MockShell>,
        store: AppStore,
        dispatcher: Dispatcher,
    }

    fn fixture() -> Fixture {
        let mock = Rc::new(MockTransport::new());
        let shell = Rc::new(MockShell::new());
        let store = new_app_store();
        let api = Api::new(mock.clone());
        let poller = Poller::new(api.clone(), store, 200);
        let dispatcher = Dispatcher::new(api, store, poller, shell.clone(), "/api");
        mock.respond("/dashboard", json!({"total_novels": 1, "total_words": 10}));
        mock.respond("/logs?limit=200", json!([]));
        mock.respond("/control/state", json!({"is_running": true, "is_paused": true}));
        Fixture {
            mock,
            shell,
            store,
            dispatcher,
        }
    }

    #[test]
    fn second_activation_while_in_flight_sends_nothing() {
        let f = fixture();
        let gate = f.mock.gate("/novels/1/generate");

        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut first = pin!(f.dispatcher.generate(1));
        assert!(first.as_mut().poll(&mut cx).is_pending());
        assert!(f.store.in_flight().read_untracked().contains(&ControlKey::Generate(1)));

        assert_eq!(block_on(f.dispatcher.generate(1)), CommandOutcome::Busy);
        assert_eq!(f.mock.count("/novels/1/generate"), 1);

        gate.send(Ok(json!(null))).unwrap();
        assert_eq!(first.as_mut().poll(&mut cx), Poll::Ready(CommandOutcome::Completed));
        assert!(f.store.in_flight().read_untracked().is_empty());
    }

    #[test]
    fn other_controls_are_not_locked_out() {
        let f = fixture();
        let _gate = f.mock.gate("/novels/1/generate");
        f.mock.respond("/novels/2/generate", json!(null));

        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut first = pin!(f.dispatcher.generate(1));
        assert!(first.as_mut().poll(&mut cx).is_pending());

        assert_eq!(block_on(f.dispatcher.generate(2)), CommandOutcome::Completed);
    }

    #[test]
    fn success_refreshes_dashboard_and_logs() {
        let f = fixture();
        f.mock.respond("/novels/4/generate", json!(null));

        assert_eq!(block_on(f.dispatcher.generate(4)), CommandOutcome::Completed);
        assert_eq!(f.mock.count("/dashboard"), 1);
        assert_eq!(f.mock.count("/logs?limit=200"), 1);
        assert_eq!(f.store.dashboard().read_untracked().total_words, 10);
        assert!(f.shell.alerts().is_empty());
    }

    #[test]
    fn failure_alerts_once_and_restores_control() {
        let f = fixture();
        f.mock.fail("/novels/4/generate", ApiError::RequestFailed { status: 400 });

        let outcome = block_on(f.dispatcher.generate(4));
        assert_eq!(outcome, CommandOutcome::Failed(ApiError::RequestFailed { status: 400 }));
        assert_eq!(f.shell.alerts(), vec![CommandKind::Generate.failure_message()]);
        assert!(f.store.in_flight().read_untracked().is_empty());
        assert_eq!(f.mock.count("/dashboard"), 0);
        assert_eq!(f.store.dashboard().read_untracked().total_words, 0);
    }

    #[test]
    fn declined_delete_is_a_no_op() {
        let f = fixture();
        f.shell.confirm_answer.set(false);

        assert_eq!(block_on(f.dispatcher.delete(5)), CommandOutcome::Declined);
        assert_eq!(f.shell.confirms.borrow().len(), 1);
        assert!(f.mock.requests().is_empty());
        assert!(f.store.in_flight().read_untracked().is_empty());
    }

    #[test]
    fn confirmed_delete_sends_request() {
        let f = fixture();
        f.mock.respond("/novels/5", json!(null));

        assert_eq!(block_on(f.dispatcher.delete(5)), CommandOutcome::Completed);
        assert_eq!(f.mock.count("/novels/5"), 1);
    }

    #[test]
    fn control_refreshes_scheduler_on_any_outcome() {
        let f = fixture();
        f.mock.fail("/control", ApiError::Transport("offline".into()));

        let outcome = block_on(f.dispatcher.control(ControlAction::Start));
        assert!(matches!(outcome, CommandOutcome::Failed(_)));
        assert_eq!(f.mock.count("/control/state"), 1);
        assert_eq!(f.shell.alerts(), vec![CommandKind::Control.failure_message()]);
        assert!(f.store.scheduler().read_untracked().is_some());
    }

    #[test]
    fn create_confirms_success_to_operator() {
        let f = fixture();
        f.mock.respond("/novels", json!({"id": 1}));
        let novel = NovelCreate {
            title: "星海".into(),
            genre: "科幻".into(),
            description: None,
            target_chapter_count: 12,
        };

        assert_eq!(block_on(f.dispatcher.create(novel)), CommandOutcome::Completed);
        assert_eq!(f.shell.alerts().len(), 1);
        assert_eq!(f.mock.count("/dashboard"), 1);
    }

    #[test]
    fn export_opens_new_tab() {
        let f = fixture();
        f.dispatcher.export(3);
        assert_eq!(*f.shell.opened.borrow(), vec!["/api/novels/3/export-docx".to_string()]);
        assert!(f.mock.requests().is_empty());
    }

    #[test]
    fn guard_release_is_scoped() {
        let store = new_app_store();
        let key = ControlKey::Delete(1);
        {
            let _guard = BusyGuard::acquire(store, key).unwrap();
            assert!(BusyGuard::acquire(store, key).is_none());
        }
        assert!(BusyGuard::acquire(store, key).is_some());
    }
}
