//! View Rendering
//!
//! Pure functions from a snapshot to the exact strings and controls a
//! region shows. Components rebuild their region from these on every
//! change, so nothing depends on what was rendered before.

use crate::chart::ChartSeries;
use crate::detail::DetailSession;
use crate::dispatch::ControlKey;
use crate::format::{format_number, progress_percent, status_label};
use crate::models::{Chapter, DashboardSnapshot, LogEntry, NovelProgress};

/// Interactive element of a novel row; each gets exactly one handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Generate,
    ViewChapters,
    Export,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 4] = [
        RowAction::Generate,
        RowAction::ViewChapters,
        RowAction::Export,
        RowAction::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RowAction::Generate => "生成一章",
            RowAction::ViewChapters => "查看正文",
            RowAction::Export => "导出Word",
            RowAction::Delete => "删除",
        }
    }

    /// Progress label while the request runs; `None` for export, which never locks
    pub fn busy_label(self) -> Option<&'static str> {
        match self {
            RowAction::Generate => Some("生成中..."),
            RowAction::ViewChapters => Some("加载中..."),
            RowAction::Delete => Some("删除中..."),
            RowAction::Export => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RowAction::Generate => "btn btn-outline-primary btn-sm",
            RowAction::ViewChapters => "btn btn-outline-secondary btn-sm ms-1",
            RowAction::Export => "btn btn-outline-success btn-sm ms-1",
            RowAction::Delete => "btn btn-outline-danger btn-sm ms-1",
        }
    }

    pub fn control_key(self, novel_id: u32) -> Option<ControlKey> {
        match self {
            RowAction::Generate => Some(ControlKey::Generate(novel_id)),
            RowAction::ViewChapters => Some(ControlKey::ViewChapters(novel_id)),
            RowAction::Delete => Some(ControlKey::Delete(novel_id)),
            RowAction::Export => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCards {
    pub total_novels: String,
    pub total_chapters: String,
    pub total_words: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NovelRow {
    pub novel_id: u32,
    pub title: String,
    pub genre: String,
    pub status: String,
    pub percent: u32,
    pub chapters: String,
    pub words: String,
    pub actions: Vec<RowAction>,
}

impl NovelRow {
    pub fn progress_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: StatCards,
    pub rows: Vec<NovelRow>,
    pub series: ChartSeries,
}

pub fn render_dashboard(snapshot: &DashboardSnapshot) -> DashboardView {
    DashboardView {
        stats: StatCards {
            total_novels: snapshot.total_novels.to_string(),
            total_chapters: snapshot.total_chapters.to_string(),
            total_words: format_number(snapshot.total_words),
        },
        rows: snapshot.novels.iter().map(render_row).collect(),
        series: ChartSeries::from_daily(&snapshot.daily_stats),
    }
}

fn render_row(novel: &NovelProgress) -> NovelRow {
    NovelRow {
        novel_id: novel.novel_id,
        title: novel.title.clone(),
        genre: novel.genre.clone(),
        status: status_label(&novel.status).to_string(),
        percent: progress_percent(novel.progress_ratio),
        chapters: format!("{}/{} 章", novel.chapter_completed, novel.chapter_total),
        words: format_number(novel.words),
        actions: RowAction::ALL.to_vec(),
    }
}

// ========================
// Logs
// ========================

pub fn log_line(entry: &LogEntry) -> String {
    let mut line = format!(
        "[{}] [{}] 小说{}：{}",
        entry.created_at, entry.level, entry.novel_id, entry.message
    );
    if let Some(latency) = entry.latency_ms {
        line.push_str(&format!(" ({:.0} ms)", latency));
    }
    line
}

/// Whole log region text, in server order
pub fn render_logs(entries: &[LogEntry]) -> String {
    entries.iter().map(log_line).collect::<Vec<_>>().join("\n")
}

// ========================
// Chapter viewer
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterView {
    pub heading: String,
    pub meta: String,
    pub outline: String,
    pub content: String,
}

pub fn chapter_heading(chapter: &Chapter) -> String {
    format!("第 {} 章：{}", chapter.index, chapter.title)
}

pub fn render_chapter(chapter: &Chapter) -> ChapterView {
    ChapterView {
        heading: chapter_heading(chapter),
        meta: format!(
            "状态：{}｜字数：{}｜创建时间：{}",
            chapter.status, chapter.word_count, chapter.created_at
        ),
        outline: chapter
            .outline
            .clone()
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| "（无小结）".to_string()),
        content: chapter
            .content
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "（暂无正文内容）".to_string()),
    }
}

/// Selector entries `(chapter id, label)` in listing order
pub fn chapter_options(session: &DetailSession) -> Vec<(u32, String)> {
    session
        .chapters
        .iter()
        .map(|c| (c.id, chapter_heading(c)))
        .collect()
}
