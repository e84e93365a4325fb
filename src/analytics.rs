//! Pure derived-statistics functions over a task snapshot.
//!
//! Every function here takes the full task collection by reference and
//! returns freshly computed values: no caching, no incremental state,
//! O(n) over the collection per call. The source collection is small
//! and mutation-cheap, so callers recompute on every render instead of
//! maintaining aggregates.
//!
//! # Calendar bucketing
//!
//! Day-based statistics (the completion trend, today counters, most
//! productive day) bucket by *local* calendar date, not by UTC
//! timestamp: a task completed at 23:30 local time counts toward that
//! local day even if the UTC date already rolled over. Date-sensitive
//! functions take `today` as a parameter; callers pass
//! `Local::now().date_naive()` and tests pass fixed dates.

use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;

use crate::constants::TREND_WINDOW_DAYS;
use crate::types::task::{Priority, Task, TaskStatus};

/// Task counts per status.
///
/// # Examples
///
/// ```
/// use taskdeck::analytics::{counts_by_status, StatusCounts};
///
/// let counts = counts_by_status(&[]);
/// assert_eq!(counts, StatusCounts { todo: 0, in_progress: 0, completed: 0 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// Tasks in `TODO`.
    pub todo: usize,
    /// Tasks in `IN_PROGRESS`.
    pub in_progress: usize,
    /// Tasks in `COMPLETED`.
    pub completed: usize,
}

/// Task counts per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityCounts {
    /// Tasks with `LOW` priority.
    pub low: usize,
    /// Tasks with `MEDIUM` priority.
    pub medium: usize,
    /// Tasks with `HIGH` priority.
    pub high: usize,
}

/// One day of the completion trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// The local calendar day.
    pub date: NaiveDate,
    /// Tasks completed on that day.
    pub count: usize,
}

/// Counts tasks by status over the whole collection.
pub fn counts_by_status(tasks: &[Task]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => counts.todo += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            TaskStatus::Completed => counts.completed += 1,
        }
    }
    counts
}

/// Counts tasks by priority over the whole collection.
pub fn counts_by_priority(tasks: &[Task]) -> PriorityCounts {
    let mut counts = PriorityCounts::default();
    for task in tasks {
        match task.priority {
            Priority::Low => counts.low += 1,
            Priority::Medium => counts.medium += 1,
            Priority::High => counts.high += 1,
        }
    }
    counts
}

/// Percentage of tasks that are completed, rounded to the nearest
/// whole percent. Returns 0 for the empty collection.
///
/// # Examples
///
/// ```
/// use taskdeck::analytics::completion_rate;
///
/// assert_eq!(completion_rate(&[]), 0);
/// ```
pub fn completion_rate(tasks: &[Task]) -> u8 {
    percentage(counts_by_status(tasks).completed, tasks.len())
}

/// Completions per local calendar day over a window of `days` days
/// ending at `today` (inclusive).
///
/// Returns exactly `days` entries ordered oldest first. A task counts
/// toward the day its `completed_at` falls on after projection to the
/// local timezone. Completions outside the window are ignored.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskdeck::analytics::daily_completion_trend;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
/// let trend = daily_completion_trend(&[], today, 7);
/// assert_eq!(trend.len(), 7);
/// assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2026, 7, 29).unwrap());
/// assert_eq!(trend[6].date, today);
/// assert!(trend.iter().all(|point| point.count == 0));
/// ```
pub fn daily_completion_trend(tasks: &[Task], today: NaiveDate, days: usize) -> Vec<TrendPoint> {
    (0..days)
        .map(|offset| {
            let date = today - Duration::days((days - 1 - offset) as i64);
            let count = tasks
                .iter()
                .filter(|task| local_completion_date(task) == Some(date))
                .count();
            TrendPoint { date, count }
        })
        .collect()
}

/// Mean time from creation to completion, in fractional days, over
/// completed tasks only. Returns 0.0 when no task is completed.
///
/// # Examples
///
/// ```
/// use taskdeck::analytics::average_completion_days;
///
/// assert_eq!(average_completion_days(&[]), 0.0);
/// ```
pub fn average_completion_days(tasks: &[Task]) -> f64 {
    let durations: Vec<f64> = tasks
        .iter()
        .filter(|task| task.status.is_completed())
        .filter_map(|task| task.completed_at.map(|done| done - task.created_at))
        .map(|elapsed| elapsed.num_milliseconds() as f64 / 86_400_000.0)
        .collect();

    if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<f64>() / durations.len() as f64
    }
}

/// The day within the trend window with the most completions.
///
/// Ties break toward the earliest date. Returns `None` when every day
/// in the window has zero completions.
pub fn most_productive_day(tasks: &[Task], today: NaiveDate) -> Option<NaiveDate> {
    let trend = daily_completion_trend(tasks, today, TREND_WINDOW_DAYS);
    let best = trend.iter().fold(None::<TrendPoint>, |best, point| {
        match best {
            // Strict comparison keeps the earliest date on ties.
            Some(current) if point.count > current.count => Some(*point),
            Some(current) => Some(current),
            None => Some(*point),
        }
    })?;

    if best.count == 0 {
        None
    } else {
        Some(best.date)
    }
}

/// This week's completions as a percentage of all tasks, rounded.
/// Weekly completions are the sum of the trend window ending at
/// `today`. Returns 0 for the empty collection.
pub fn productivity_score(tasks: &[Task], today: NaiveDate) -> u8 {
    let weekly: usize = daily_completion_trend(tasks, today, TREND_WINDOW_DAYS)
        .iter()
        .map(|point| point.count)
        .sum();
    percentage(weekly, tasks.len())
}

/// Count of high-priority tasks that are not yet completed.
pub fn high_priority_pending(tasks: &[Task]) -> usize {
    tasks
        .iter()
        .filter(|task| task.priority == Priority::High && !task.status.is_completed())
        .count()
}

/// Count of tasks created on `today` (local calendar date).
pub fn created_today(tasks: &[Task], today: NaiveDate) -> usize {
    tasks
        .iter()
        .filter(|task| task.created_at.with_timezone(&Local).date_naive() == today)
        .count()
}

/// Count of tasks completed on `today` (local calendar date).
pub fn completed_today(tasks: &[Task], today: NaiveDate) -> usize {
    tasks
        .iter()
        .filter(|task| local_completion_date(task) == Some(today))
        .count()
}

/// Everything the dashboard shows, computed in one pass over the
/// snapshot.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskdeck::Dashboard;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
/// let dashboard = Dashboard::compute(&[], today);
/// assert_eq!(dashboard.total, 0);
/// assert_eq!(dashboard.completion_rate, 0);
/// assert_eq!(dashboard.productivity_score, 0);
/// assert!(dashboard.most_productive_day.is_none());
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// All tasks in the collection.
    pub total: usize,
    /// Distribution over statuses.
    pub by_status: StatusCounts,
    /// Distribution over priorities.
    pub by_priority: PriorityCounts,
    /// Completed share of all tasks, in whole percent.
    pub completion_rate: u8,
    /// Mean creation-to-completion time in days.
    pub average_completion_days: f64,
    /// Completions per day, oldest first, for the trend window.
    pub trend: Vec<TrendPoint>,
    /// Window day with the most completions, if any.
    pub most_productive_day: Option<NaiveDate>,
    /// Weekly completions as a share of all tasks, in whole percent.
    pub productivity_score: u8,
    /// High-priority tasks still open.
    pub high_priority_pending: usize,
    /// Tasks created today.
    pub created_today: usize,
    /// Tasks completed today.
    pub completed_today: usize,
}

impl Dashboard {
    /// Computes the full dashboard from a snapshot.
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        Self {
            total: tasks.len(),
            by_status: counts_by_status(tasks),
            by_priority: counts_by_priority(tasks),
            completion_rate: completion_rate(tasks),
            average_completion_days: average_completion_days(tasks),
            trend: daily_completion_trend(tasks, today, TREND_WINDOW_DAYS),
            most_productive_day: most_productive_day(tasks, today),
            productivity_score: productivity_score(tasks, today),
            high_priority_pending: high_priority_pending(tasks),
            created_today: created_today(tasks, today),
            completed_today: completed_today(tasks, today),
        }
    }
}

/// Projects a completion timestamp onto its local calendar date.
fn local_completion_date(task: &Task) -> Option<NaiveDate> {
    task.completed_at
        .map(|done| done.with_timezone(&Local).date_naive())
}

/// `part / whole` in whole percent, rounded; 0 when `whole` is 0.
fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    /// Noon local time on the given date, as a UTC instant. Noon keeps
    /// the local calendar date stable regardless of the host timezone.
    fn local_noon(date: NaiveDate) -> DateTime<Utc> {
        Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .single()
            .expect("noon is never ambiguous")
            .with_timezone(&Utc)
    }

    fn task(status: TaskStatus, priority: Priority) -> Task {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: "task".to_string(),
            description: None,
            status,
            priority,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// A task completed at local noon `days_ago` days before `today`,
    /// created `lead_days` days before that.
    fn completed_task(today: NaiveDate, days_ago: i64, lead_days: i64) -> Task {
        let done = local_noon(today - Duration::days(days_ago));
        let mut t = task(TaskStatus::Completed, Priority::Medium);
        t.created_at = done - Duration::days(lead_days);
        t.completed_at = Some(done);
        t
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    // ---- counts ----

    #[test]
    fn counts_by_status_buckets_all() {
        let tasks = vec![
            task(TaskStatus::Todo, Priority::Low),
            task(TaskStatus::Todo, Priority::Medium),
            task(TaskStatus::InProgress, Priority::High),
            task(TaskStatus::Completed, Priority::High),
        ];
        let counts = counts_by_status(&tasks);
        assert_eq!(counts.todo, 2);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn counts_by_priority_buckets_all() {
        let tasks = vec![
            task(TaskStatus::Todo, Priority::Low),
            task(TaskStatus::Todo, Priority::High),
            task(TaskStatus::InProgress, Priority::High),
        ];
        let counts = counts_by_priority(&tasks);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.medium, 0);
        assert_eq!(counts.high, 2);
    }

    // ---- completion rate ----

    #[test]
    fn completion_rate_empty_is_zero() {
        assert_eq!(completion_rate(&[]), 0);
    }

    #[test]
    fn completion_rate_rounds() {
        // 1 of 3 completed -> 33.33... -> 33
        let tasks = vec![
            task(TaskStatus::Completed, Priority::Medium),
            task(TaskStatus::Todo, Priority::Medium),
            task(TaskStatus::Todo, Priority::Medium),
        ];
        assert_eq!(completion_rate(&tasks), 33);

        // 2 of 3 completed -> 66.66... -> 67
        let tasks = vec![
            task(TaskStatus::Completed, Priority::Medium),
            task(TaskStatus::Completed, Priority::Medium),
            task(TaskStatus::Todo, Priority::Medium),
        ];
        assert_eq!(completion_rate(&tasks), 67);
    }

    #[test]
    fn completion_rate_all_completed_is_100() {
        let tasks = vec![task(TaskStatus::Completed, Priority::Low)];
        assert_eq!(completion_rate(&tasks), 100);
    }

    // ---- trend ----

    #[test]
    fn trend_has_exactly_n_ordered_entries() {
        let today = today();
        for days in [1, 7, 30] {
            let trend = daily_completion_trend(&[], today, days);
            assert_eq!(trend.len(), days);
            assert_eq!(trend.last().unwrap().date, today);
            for pair in trend.windows(2) {
                assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            }
        }
    }

    #[test]
    fn trend_zero_days_is_empty() {
        assert!(daily_completion_trend(&[], today(), 0).is_empty());
    }

    #[test]
    fn trend_buckets_by_local_day() {
        let today = today();
        let tasks = vec![
            completed_task(today, 0, 1),
            completed_task(today, 2, 1),
            completed_task(today, 2, 1),
            // Outside the 7-day window
            completed_task(today, 10, 1),
            // Never completed
            task(TaskStatus::Todo, Priority::Medium),
        ];
        let trend = daily_completion_trend(&tasks, today, 7);
        assert_eq!(trend[6].count, 1, "today");
        assert_eq!(trend[4].count, 2, "two days ago");
        let total: usize = trend.iter().map(|p| p.count).sum();
        assert_eq!(total, 3, "window excludes the 10-day-old completion");
    }

    // ---- average completion days ----

    #[test]
    fn average_completion_days_empty_is_zero() {
        assert_eq!(average_completion_days(&[]), 0.0);
        let open = vec![task(TaskStatus::InProgress, Priority::Medium)];
        assert_eq!(average_completion_days(&open), 0.0);
    }

    #[test]
    fn average_completion_days_means_over_completed() {
        let today = today();
        // One completed 2 days after creation, one the same day.
        let tasks = vec![
            completed_task(today, 1, 2),
            completed_task(today, 1, 0),
        ];
        let avg = average_completion_days(&tasks);
        assert!((avg - 1.0).abs() < 1e-9, "expected ~1.0, got {avg}");
    }

    // ---- most productive day ----

    #[test]
    fn most_productive_day_none_when_no_completions() {
        assert_eq!(most_productive_day(&[], today()), None);
        let open = vec![task(TaskStatus::Todo, Priority::Medium)];
        assert_eq!(most_productive_day(&open, today()), None);
    }

    #[test]
    fn most_productive_day_picks_max() {
        let today = today();
        let tasks = vec![
            completed_task(today, 0, 1),
            completed_task(today, 3, 1),
            completed_task(today, 3, 1),
        ];
        assert_eq!(
            most_productive_day(&tasks, today),
            Some(today - Duration::days(3))
        );
    }

    #[test]
    fn most_productive_day_tie_breaks_earliest() {
        let today = today();
        let tasks = vec![
            completed_task(today, 1, 1),
            completed_task(today, 5, 1),
        ];
        assert_eq!(
            most_productive_day(&tasks, today),
            Some(today - Duration::days(5))
        );
    }

    // ---- productivity score ----

    #[test]
    fn productivity_score_empty_is_zero() {
        assert_eq!(productivity_score(&[], today()), 0);
    }

    #[test]
    fn productivity_score_counts_window_only() {
        let today = today();
        let tasks = vec![
            completed_task(today, 0, 1),
            completed_task(today, 10, 1), // outside the window
            task(TaskStatus::Todo, Priority::Medium),
            task(TaskStatus::Todo, Priority::Medium),
        ];
        // 1 weekly completion of 4 tasks -> 25%
        assert_eq!(productivity_score(&tasks, today), 25);
    }

    // ---- insight counters ----

    #[test]
    fn high_priority_pending_excludes_completed() {
        let tasks = vec![
            task(TaskStatus::Todo, Priority::High),
            task(TaskStatus::InProgress, Priority::High),
            task(TaskStatus::Completed, Priority::High),
            task(TaskStatus::Todo, Priority::Low),
        ];
        assert_eq!(high_priority_pending(&tasks), 2);
    }

    #[test]
    fn today_counters() {
        let today = today();
        let mut created_now = task(TaskStatus::Todo, Priority::Medium);
        created_now.created_at = local_noon(today);
        let mut created_earlier = task(TaskStatus::Todo, Priority::Medium);
        created_earlier.created_at = local_noon(today - Duration::days(3));

        let tasks = vec![
            created_now,
            created_earlier,
            completed_task(today, 0, 1),
            completed_task(today, 2, 1),
        ];
        assert_eq!(created_today(&tasks, today), 1);
        assert_eq!(completed_today(&tasks, today), 1);
    }

    // ---- dashboard ----

    #[test]
    fn dashboard_bundles_everything() {
        let today = today();
        let tasks = vec![
            completed_task(today, 0, 2),
            task(TaskStatus::Todo, Priority::High),
        ];
        let dashboard = Dashboard::compute(&tasks, today);
        assert_eq!(dashboard.total, 2);
        assert_eq!(dashboard.by_status.completed, 1);
        assert_eq!(dashboard.by_priority.high, 1);
        assert_eq!(dashboard.completion_rate, 50);
        assert_eq!(dashboard.trend.len(), TREND_WINDOW_DAYS);
        assert_eq!(dashboard.most_productive_day, Some(today));
        assert_eq!(dashboard.productivity_score, 50);
        assert_eq!(dashboard.high_priority_pending, 1);
    }

    #[test]
    fn dashboard_serializes_camel_case() {
        let json = serde_json::to_value(Dashboard::compute(&[], today())).unwrap();
        assert!(json.get("byStatus").is_some());
        assert!(json.get("completionRate").is_some());
        assert!(json.get("mostProductiveDay").is_some());
        assert!(json["mostProductiveDay"].is_null());
        assert!(json.get("highPriorityPending").is_some());
        assert_eq!(json["trend"].as_array().unwrap().len(), TREND_WINDOW_DAYS);
    }
}
