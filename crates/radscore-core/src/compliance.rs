//! Follow-up compliance tracking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use radscore_model::{FollowUp, FollowUpStatus};

/// Follow-up counts per stored status.
///
/// Follow-ups stored as `overdue` are not counted here; lateness is measured
/// against the due date in [`ComplianceMetrics::overdue`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub pending: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplianceMetrics {
    pub total: usize,
    pub breakdown: StatusBreakdown,
    /// Open follow-ups past their due date.
    pub overdue: usize,
    pub completed_on_time: usize,
    /// Completed after the due date, or without the dates to tell.
    pub completed_late: usize,
    /// Percentage of all follow-ups completed on time.
    pub completion_rate: f64,
    /// Percentage of all follow-ups currently overdue.
    pub overdue_rate: f64,
}

/// Summarize follow-up compliance as of `today`. Both rates are `0.0` for an
/// empty list.
pub fn compliance_metrics(follow_ups: &[FollowUp], today: NaiveDate) -> ComplianceMetrics {
    let mut metrics = ComplianceMetrics {
        total: follow_ups.len(),
        ..ComplianceMetrics::default()
    };
    for follow_up in follow_ups {
        match follow_up.status {
            FollowUpStatus::Pending => metrics.breakdown.pending += 1,
            FollowUpStatus::Scheduled => metrics.breakdown.scheduled += 1,
            FollowUpStatus::Completed => metrics.breakdown.completed += 1,
            FollowUpStatus::Cancelled => metrics.breakdown.cancelled += 1,
            FollowUpStatus::Overdue => {}
        }
        if follow_up.is_overdue(today) {
            metrics.overdue += 1;
        }
        match follow_up.completed_on_time() {
            Some(true) => metrics.completed_on_time += 1,
            Some(false) => metrics.completed_late += 1,
            None if follow_up.status == FollowUpStatus::Completed => metrics.completed_late += 1,
            None => {}
        }
    }
    metrics.completion_rate = percentage(metrics.completed_on_time, metrics.total);
    metrics.overdue_rate = percentage(metrics.overdue, metrics.total);
    tracing::debug!(
        total = metrics.total,
        overdue = metrics.overdue,
        completed_on_time = metrics.completed_on_time,
        "computed follow-up compliance"
    );
    metrics
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
