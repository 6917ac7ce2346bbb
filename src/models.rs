//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// Novel lifecycle status (matches backend enum values)
///
/// Unknown values are kept verbatim so a newer backend never breaks decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NovelStatus {
    #[default]
    Planned,
    Writing,
    Paused,
    Completed,
    Error,
    Other(String),
}

impl From<String> for NovelStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PLANNED" => NovelStatus::Planned,
            "WRITING" => NovelStatus::Writing,
            "PAUSED" => NovelStatus::Paused,
            "COMPLETED" => NovelStatus::Completed,
            "ERROR" => NovelStatus::Error,
            _ => NovelStatus::Other(value),
        }
    }
}

impl From<NovelStatus> for String {
    fn from(status: NovelStatus) -> Self {
        match status {
            NovelStatus::Planned => "PLANNED".to_string(),
            NovelStatus::Writing => "WRITING".to_string(),
            NovelStatus::Paused => "PAUSED".to_string(),
            NovelStatus::Completed => "COMPLETED".to_string(),
            NovelStatus::Error => "ERROR".to_string(),
            NovelStatus::Other(raw) => raw,
        }
    }
}

/// Per-novel progress row of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovelProgress {
    pub novel_id: u32,
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub status: NovelStatus,
    /// Completed chapters / total chapters, in [0, 1]
    #[serde(default)]
    pub progress_ratio: f64,
    #[serde(default)]
    pub chapter_completed: u32,
    #[serde(default)]
    pub chapter_total: u32,
    #[serde(default)]
    pub words: u64,
}

/// One point of the daily output trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: String,
    #[serde(default)]
    pub novel_count: u32,
    #[serde(default)]
    pub chapter_count: u32,
    #[serde(default)]
    pub word_count: u64,
}

/// Aggregate dashboard payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub total_novels: u64,
    #[serde(default)]
    pub total_chapters: u64,
    #[serde(default)]
    pub total_words: u64,
    /// Ordered by date
    #[serde(default)]
    pub daily_stats: Vec<DailyProgress>,
    #[serde(default)]
    pub novels: Vec<NovelProgress>,
}

/// Creation log line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub id: u64,
    pub novel_id: u32,
    #[serde(default)]
    pub chapter_id: Option<u32>,
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    pub created_at: String,
}

/// Scheduler run state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulerState {
    pub is_running: bool,
    pub is_paused: bool,
    #[serde(default)]
    pub last_heartbeat: Option<String>,
}

/// Chapter record
///
/// The listing endpoint may elide `content`; the single-chapter endpoint
/// always carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u32,
    pub index: u32,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub word_count: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub outline: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Chapter {
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}

/// Scheduler control verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlAction {
    Start,
    Pause,
    Resume,
    Stop,
}

impl ControlAction {
    pub const ALL: [ControlAction; 4] = [
        ControlAction::Start,
        ControlAction::Pause,
        ControlAction::Resume,
        ControlAction::Stop,
    ];

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            ControlAction::Start => "启动",
            ControlAction::Pause => "暂停",
            ControlAction::Resume => "恢复",
            ControlAction::Stop => "停止",
        }
    }
}

/// Body of `POST /novels`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovelCreate {
    pub title: String,
    pub genre: String,
    pub description: Option<String>,
    pub target_chapter_count: u32,
}

/// Chapter count used when the form field is blank or invalid
pub const DEFAULT_CHAPTER_COUNT: u32 = 10;

impl NovelCreate {
    /// Build from raw form inputs; a blank title is rejected with a notice
    pub fn from_form(
        title: &str,
        genre: &str,
        description: &str,
        chapters: &str,
    ) -> Result<Self, &'static str> {
        let title = title.trim();
        if title.is_empty() {
            return Err("请先填写小说标题。");
        }
        let genre = genre.trim();
        let description = description.trim();
        Ok(Self {
            title: title.to_string(),
            genre: if genre.is_empty() { "未知".to_string() } else { genre.to_string() },
            description: (!description.is_empty()).then(|| description.to_string()),
            target_chapter_count: chapters
                .trim()
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_CHAPTER_COUNT),
        })
    }
}

/// Body of `POST /config`; absent fields are left unchanged server-side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_target_novels: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_chapters_per_novel: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_api_requests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_requests_per_minute: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_genres: Option<Vec<String>>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ConfigUpdate::default()
    }

    /// Blank or unparsable fields are left out of the update
    pub fn from_form(
        daily_target_novels: &str,
        default_chapters_per_novel: &str,
        max_concurrent_api_requests: &str,
        max_requests_per_minute: &str,
        preferred_genres: &str,
    ) -> Self {
        let number = |raw: &str| raw.trim().parse::<u32>().ok();
        let genres: Vec<String> = preferred_genres
            .split([',', '，'])
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            daily_target_novels: number(daily_target_novels),
            default_chapters_per_novel: number(default_chapters_per_novel),
            max_concurrent_api_requests: number(max_concurrent_api_requests),
            max_requests_per_minute: number(max_requests_per_minute),
            preferred_genres: (!genres.is_empty()).then_some(genres),
        }
    }
}
