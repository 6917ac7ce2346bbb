//! Display Formatting
//!
//! Pure mappings from raw values to the strings shown on the page.

use crate::models::{NovelStatus, SchedulerState};

/// Abbreviate a word count: `0`, `999`, `1.2万`, `2.5M`.
///
/// One decimal place, ties rounded away from zero.
pub fn format_number(value: u64) -> String {
    const MILLION: u64 = 1_000_000;
    const WAN: u64 = 10_000;

    if value >= MILLION {
        format!("{}M", tenths(value, MILLION))
    } else if value >= WAN {
        format!("{}万", tenths(value, WAN))
    } else {
        value.to_string()
    }
}

fn tenths(value: u64, unit: u64) -> String {
    let scaled = (value as u128 * 10 + unit as u128 / 2) / unit as u128;
    format!("{}.{}", scaled / 10, scaled % 10)
}

/// Progress percentage shown for a ratio in [0, 1]
pub fn progress_percent(ratio: f64) -> u32 {
    if ratio.is_finite() && ratio > 0.0 {
        (ratio * 100.0).round() as u32
    } else {
        0
    }
}

/// Status label, raw value for anything outside the known table
pub fn status_label(status: &NovelStatus) -> &str {
    match status {
        NovelStatus::Planned => "已规划",
        NovelStatus::Writing => "创作中",
        NovelStatus::Paused => "已暂停",
        NovelStatus::Completed => "已完成",
        NovelStatus::Error => "错误",
        NovelStatus::Other(raw) => raw,
    }
}

/// Three-way scheduler display state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerDisplay {
    Stopped,
    Paused,
    Running,
}

impl From<&SchedulerState> for SchedulerDisplay {
    fn from(state: &SchedulerState) -> Self {
        if !state.is_running {
            SchedulerDisplay::Stopped
        } else if state.is_paused {
            SchedulerDisplay::Paused
        } else {
            SchedulerDisplay::Running
        }
    }
}

impl SchedulerDisplay {
    pub fn label(self) -> &'static str {
        match self {
            SchedulerDisplay::Stopped => "未运行",
            SchedulerDisplay::Paused => "已暂停",
            SchedulerDisplay::Running => "运行中",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SchedulerDisplay::Stopped => "text-danger fw-bold",
            SchedulerDisplay::Paused => "text-warning fw-bold",
            SchedulerDisplay::Running => "text-success fw-bold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_abbreviation() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(9_999), "9999");
        assert_eq!(format_number(12_345), "1.2万");
        assert_eq!(format_number(12_000), "1.2万");
        assert_eq!(format_number(12_500), "1.3万");
        assert_eq!(format_number(2_500_000), "2.5M");
        assert_eq!(format_number(999_999), "100.0万");
    }

    #[test]
    fn percent_rounds_ratio() {
        assert_eq!(progress_percent(0.4), 40);
        assert_eq!(progress_percent(0.333), 33);
        assert_eq!(progress_percent(1.0), 100);
        assert_eq!(progress_percent(0.0), 0);
        assert_eq!(progress_percent(f64::NAN), 0);
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(&NovelStatus::Writing), "创作中");
        assert_eq!(status_label(&NovelStatus::Error), "错误");
        assert_eq!(status_label(&NovelStatus::Other("DRAFT".into())), "DRAFT");
    }

    #[test]
    fn scheduler_display_priority() {
        let state = |is_running, is_paused| SchedulerState {
            is_running,
            is_paused,
            last_heartbeat: None,
        };
        assert_eq!(SchedulerDisplay::from(&state(false, true)), SchedulerDisplay::Stopped);
        assert_eq!(SchedulerDisplay::from(&state(false, false)), SchedulerDisplay::Stopped);
        assert_eq!(SchedulerDisplay::from(&state(true, true)), SchedulerDisplay::Paused);
        assert_eq!(SchedulerDisplay::from(&state(true, false)), SchedulerDisplay::Running);
        assert_eq!(SchedulerDisplay::Stopped.label(), "未运行");
    }
}
