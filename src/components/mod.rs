//! UI Components
//!
//! Thin Leptos views over the store; all state changes go through the
//! engine handles in [`crate::context::Console`].

mod chapter_modal;
mod command_button;
mod create_novel_form;
mod dashboard_panel;
mod log_panel;
mod novel_table;
mod scheduler_panel;
mod settings_form;
mod stats_cards;
mod trend_panel;

pub use chapter_modal::ChapterModal;
pub use command_button::CommandButton;
pub use create_novel_form::CreateNovelForm;
pub use dashboard_panel::DashboardPanel;
pub use log_panel::LogPanel;
pub use novel_table::NovelTable;
pub use scheduler_panel::SchedulerPanel;
pub use settings_form::SettingsForm;
pub use stats_cards::StatsCards;
pub use trend_panel::TrendPanel;
