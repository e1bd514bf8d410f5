//! 仪表盘统计：总数与 30 天环比。
//!
//! 当前窗口为 `[now-30d, now]`，上一窗口为 `[now-60d, now-31d]`，两个窗口之间
//! 隔开一天。展示的数值是全部记录数，环比只比较两个窗口内新增的记录数。

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::api::models::{Appointment, Doctor, Patient};

pub const WINDOW_DAYS: i64 = 30;
pub const PREVIOUS_WINDOW_OFFSET_DAYS: i64 = 31;
pub const PREVIOUS_WINDOW_START_DAYS: i64 = 60;

pub const PATIENTS_STAT: &str = "Total Patients";
pub const APPOINTMENTS_STAT: &str = "Total Appointments";
pub const DOCTORS_STAT: &str = "Active Doctors";

/// 闭区间时间窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

pub fn current_window(now: DateTime<Utc>) -> Window {
    Window {
        start: now - Duration::days(WINDOW_DAYS),
        end: now,
    }
}

pub fn previous_window(now: DateTime<Utc>) -> Window {
    Window {
        start: now - Duration::days(PREVIOUS_WINDOW_START_DAYS),
        end: now - Duration::days(PREVIOUS_WINDOW_OFFSET_DAYS),
    }
}

/// 参与统计的时间戳
pub trait Timestamped {
    fn timestamp(&self) -> Option<DateTime<Utc>>;
}

impl Timestamped for Patient {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Timestamped for Doctor {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Timestamped for Appointment {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.date_time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCounts {
    pub current: u64,
    pub previous: u64,
}

/// 没有时间戳的记录不计入任何窗口
pub fn window_counts<T: Timestamped>(now: DateTime<Utc>, items: &[T]) -> WindowCounts {
    let current = current_window(now);
    let previous = previous_window(now);

    items
        .iter()
        .filter_map(|item| item.timestamp())
        .fold(WindowCounts { current: 0, previous: 0 }, |mut acc, at| {
            if current.contains(at) {
                acc.current += 1;
            } else if previous.contains(at) {
                acc.previous += 1;
            }
            acc
        })
}

/// 环比百分比。上期为 0 时固定返回 "0%" 或 "+100%"
pub fn percent_change(current: u64, previous: u64) -> String {
    if previous == 0 {
        return if current == 0 { "0%" } else { "+100%" }.to_string();
    }

    let ratio = (current as f64 - previous as f64) / previous as f64 * 100.0;
    let rounded = (ratio * 100.0).round() / 100.0;
    if rounded > 0.0 {
        format!("+{}%", rounded)
    } else if rounded == 0.0 {
        "0%".to_string()
    } else {
        format!("{}%", rounded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatResult {
    pub name: String,
    pub current_value: u64,
    pub change_percent: String,
}

pub fn stat<T: Timestamped>(name: &str, now: DateTime<Utc>, items: &[T]) -> StatResult {
    let counts = window_counts(now, items);
    StatResult {
        name: name.to_string(),
        current_value: items.len() as u64,
        change_percent: percent_change(counts.current, counts.previous),
    }
}

/// 依次为患者、预约、医生
pub fn derive_stats(
    now: DateTime<Utc>,
    patients: &[Patient],
    appointments: &[Appointment],
    doctors: &[Doctor],
) -> Vec<StatResult> {
    vec![
        stat(PATIENTS_STAT, now, patients),
        stat(APPOINTMENTS_STAT, now, appointments),
        stat(DOCTORS_STAT, now, doctors),
    ]
}
