//! Chapter Detail Session
//!
//! Opening a novel's chapters fetches the listing once; switching chapters
//! reuses listed entries that carry content and falls back to a single
//! chapter fetch otherwise. The listing may be a summary projection.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::Api;
use crate::dispatch::{BusyGuard, ControlKey};
use crate::error::{ApiError, ApiResult};
use crate::models::Chapter;
use crate::shell::BrowserShell;
use crate::store::{AppStore, ViewModelStoreFields};

const NO_CHAPTERS: &str = "该小说暂无已生成章节。";
const LIST_FAILED: &str = "加载章节列表失败，请稍后重试。";
const CHAPTER_FAILED: &str = "加载章节内容失败。";

/// State of the open chapter viewer
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSession {
    pub novel_id: u32,
    /// Listing order as returned by the server
    pub chapters: Vec<Chapter>,
    /// Chapter whose content is on screen
    pub current: Chapter,
    /// Selector value; differs from `current.id` while a fetch is pending
    pub selected_id: u32,
}

impl DetailSession {
    /// Seeded with the first chapter; `None` for an empty listing
    pub fn open(novel_id: u32, chapters: Vec<Chapter>) -> Option<Self> {
        let current = chapters.first()?.clone();
        Some(Self {
            novel_id,
            selected_id: current.id,
            current,
            chapters,
        })
    }

    /// Listed entry that already carries its content
    pub fn local_full(&self, chapter_id: u32) -> Option<&Chapter> {
        self.chapters
            .iter()
            .find(|c| c.id == chapter_id && c.has_content())
    }

    /// Display `chapter` and remember its full form in the listing
    pub fn show(&mut self, chapter: Chapter) {
        self.cache(chapter.clone());
        self.selected_id = chapter.id;
        self.current = chapter;
    }

    fn cache(&mut self, chapter: Chapter) {
        if let Some(slot) = self.chapters.iter_mut().find(|c| c.id == chapter.id) {
            *slot = chapter;
        }
    }
}

#[derive(Clone)]
pub struct DetailController {
    api: Api,
    store: AppStore,
    shell: Rc<dyn BrowserShell>,
}

impl DetailController {
    pub fn new(api: Api, store: AppStore, shell: Rc<dyn BrowserShell>) -> Self {
        Self { api, store, shell }
    }

    /// Load a novel's chapters and open the viewer.
    ///
    /// An empty listing shows a notice and leaves the viewer closed. A second
    /// call while the first is loading does nothing.
    pub async fn open(&self, novel_id: u32) -> ApiResult<()> {
        let Some(_busy) = BusyGuard::acquire(self.store, ControlKey::ViewChapters(novel_id)) else {
            return Ok(());
        };

        let chapters = match self.api.list_chapters(novel_id).await {
            Ok(chapters) => chapters,
            Err(e) => {
                log::error!("loading chapters of novel {} failed: {}", novel_id, e);
                self.shell.alert(LIST_FAILED);
                return Err(e);
            }
        };

        match DetailSession::open(novel_id, chapters) {
            Some(session) => {
                log::debug!("opened novel {} with {} chapters", novel_id, session.chapters.len());
                *self.store.detail().write() = Some(session);
                Ok(())
            }
            None => {
                self.shell.alert(NO_CHAPTERS);
                Err(ApiError::EmptyResult("novel has no generated chapters"))
            }
        }
    }

    /// Switch the viewer to another chapter without closing it
    pub async fn select(&self, chapter_id: u32) -> ApiResult<()> {
        let Some(session) = self.store.detail().get_untracked() else {
            return Ok(());
        };
        let novel_id = session.novel_id;

        if let Some(chapter) = session.local_full(chapter_id).cloned() {
            self.update_session(novel_id, |s| s.show(chapter));
            return Ok(());
        }

        self.update_session(novel_id, |s| s.selected_id = chapter_id);
        match self.api.get_chapter(chapter_id).await {
            Ok(chapter) => {
                self.update_session(novel_id, |s| {
                    if s.selected_id == chapter_id {
                        s.show(chapter);
                    } else {
                        s.cache(chapter);
                    }
                });
                Ok(())
            }
            Err(e) => {
                log::error!("loading chapter {} failed: {}", chapter_id, e);
                self.shell.alert(CHAPTER_FAILED);
                self.update_session(novel_id, |s| {
                    if s.selected_id == chapter_id {
                        s.selected_id = s.current.id;
                    }
                });
                Err(e)
            }
        }
    }

    pub fn close(&self) {
        *self.store.detail().write() = None;
    }

    /// Apply `f` only if the viewer still shows `novel_id`
    fn update_session(&self, novel_id: u32, f: impl FnOnce(&mut DetailSession)) {
        let field = self.store.detail();
        let mut detail = field.write();
        if let Some(session) = &mut *detail {
            if session.novel_id == novel_id {
                f(session);
            }
        }
    }
}
