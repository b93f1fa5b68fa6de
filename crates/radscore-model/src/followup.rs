//! Tracked follow-up recommendations and their status lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};
use crate::interval::RecommendationInterval;

/// Where a follow-up stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpStatus {
    #[default]
    Pending,
    Scheduled,
    Completed,
    Cancelled,
    Overdue,
}

impl FollowUpStatus {
    pub const ALL: [FollowUpStatus; 5] = [
        FollowUpStatus::Pending,
        FollowUpStatus::Scheduled,
        FollowUpStatus::Completed,
        FollowUpStatus::Cancelled,
        FollowUpStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpStatus::Pending => "pending",
            FollowUpStatus::Scheduled => "scheduled",
            FollowUpStatus::Completed => "completed",
            FollowUpStatus::Cancelled => "cancelled",
            FollowUpStatus::Overdue => "overdue",
        }
    }

    /// Completed and cancelled follow-ups are closed; they can only be
    /// reopened to pending.
    pub fn is_closed(&self) -> bool {
        matches!(self, FollowUpStatus::Completed | FollowUpStatus::Cancelled)
    }

    /// Allowed transitions:
    ///
    /// | from      | to                                 |
    /// |-----------|------------------------------------|
    /// | pending   | scheduled, completed, cancelled    |
    /// | scheduled | pending, completed, cancelled      |
    /// | overdue   | scheduled, completed, cancelled    |
    /// | completed | pending                            |
    /// | cancelled | pending                            |
    pub fn can_transition_to(&self, next: FollowUpStatus) -> bool {
        use FollowUpStatus::{Cancelled, Completed, Overdue, Pending, Scheduled};
        match self {
            Pending => matches!(next, Scheduled | Completed | Cancelled),
            Scheduled => matches!(next, Pending | Completed | Cancelled),
            Overdue => matches!(next, Scheduled | Completed | Cancelled),
            Completed | Cancelled => next == Pending,
        }
    }
}

impl fmt::Display for FollowUpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FollowUpStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        FollowUpStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == lowered)
            .ok_or_else(|| ModelError::UnknownFollowUpStatus(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpPriority {
    #[default]
    Routine,
    Urgent,
    Stat,
}

impl FollowUpPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpPriority::Routine => "routine",
            FollowUpPriority::Urgent => "urgent",
            FollowUpPriority::Stat => "stat",
        }
    }
}

impl fmt::Display for FollowUpPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A follow-up recommendation being tracked to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUp {
    pub interval: RecommendationInterval,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: FollowUpStatus,
    #[serde(default)]
    pub priority: FollowUpPriority,
    /// Date of the last status change.
    #[serde(default)]
    pub updated_on: Option<NaiveDate>,
}

impl FollowUp {
    /// A pending, routine follow-up.
    pub fn new(interval: RecommendationInterval, due_date: Option<NaiveDate>) -> Self {
        Self {
            interval,
            due_date,
            status: FollowUpStatus::Pending,
            priority: FollowUpPriority::Routine,
            updated_on: None,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: FollowUpPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Move to `next`, recording `on` as the change date.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidStatusTransition`] when the lifecycle does
    /// not allow the move; the follow-up is left unchanged.
    pub fn update_status(&mut self, next: FollowUpStatus, on: NaiveDate) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(ModelError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        self.updated_on = Some(on);
        Ok(())
    }

    /// Past due on `today` and still open. Follow-ups without a due date are
    /// never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => !self.status.is_closed() && today > due,
            None => false,
        }
    }

    /// Completed no later than the due date.
    pub fn completed_on_time(&self) -> Option<bool> {
        if self.status != FollowUpStatus::Completed {
            return None;
        }
        Some(self.updated_on? <= self.due_date?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::IntervalUnit;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn follow_up() -> FollowUp {
        let interval = RecommendationInterval::new(3, IntervalUnit::Months).unwrap();
        FollowUp::new(interval, Some(date(2024, 3, 31)))
    }

    #[test]
    fn lifecycle_transitions() {
        use FollowUpStatus::{Cancelled, Completed, Overdue, Pending, Scheduled};
        assert!(Pending.can_transition_to(Scheduled));
        assert!(Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Overdue));
        assert!(!Pending.can_transition_to(Pending));
        assert!(Scheduled.can_transition_to(Pending));
        assert!(!Scheduled.can_transition_to(Overdue));
        assert!(Overdue.can_transition_to(Scheduled));
        assert!(!Overdue.can_transition_to(Pending));
        for closed in [Completed, Cancelled] {
            assert!(closed.can_transition_to(Pending));
            assert!(!closed.can_transition_to(Scheduled));
            assert!(!closed.can_transition_to(Completed));
        }
    }

    #[test]
    fn update_status_records_change_date() {
        let mut tracked = follow_up();
        tracked
            .update_status(FollowUpStatus::Scheduled, date(2024, 2, 1))
            .unwrap();
        assert_eq!(tracked.status, FollowUpStatus::Scheduled);
        assert_eq!(tracked.updated_on, Some(date(2024, 2, 1)));
    }

    #[test]
    fn rejected_transition_leaves_follow_up_unchanged() {
        let mut tracked = follow_up();
        tracked
            .update_status(FollowUpStatus::Cancelled, date(2024, 2, 1))
            .unwrap();
        let error = tracked
            .update_status(FollowUpStatus::Completed, date(2024, 2, 2))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid follow-up status transition: cancelled -> completed"
        );
        assert_eq!(tracked.status, FollowUpStatus::Cancelled);
        assert_eq!(tracked.updated_on, Some(date(2024, 2, 1)));
    }

    #[test]
    fn overdue_only_while_open() {
        let mut tracked = follow_up();
        assert!(!tracked.is_overdue(date(2024, 3, 31)));
        assert!(tracked.is_overdue(date(2024, 4, 1)));

        tracked
            .update_status(FollowUpStatus::Completed, date(2024, 4, 2))
            .unwrap();
        assert!(!tracked.is_overdue(date(2024, 5, 1)));

        let undated = FollowUp {
            due_date: None,
            ..follow_up()
        };
        assert!(!undated.is_overdue(date(2030, 1, 1)));
    }

    #[test]
    fn on_time_completion() {
        let mut tracked = follow_up();
        assert_eq!(tracked.completed_on_time(), None);
        tracked
            .update_status(FollowUpStatus::Completed, date(2024, 3, 31))
            .unwrap();
        assert_eq!(tracked.completed_on_time(), Some(true));
        tracked.updated_on = Some(date(2024, 4, 1));
        assert_eq!(tracked.completed_on_time(), Some(false));
    }

    #[test]
    fn status_labels_parse() {
        for status in FollowUpStatus::ALL {
            assert_eq!(status.as_str().parse::<FollowUpStatus>(), Ok(status));
        }
        assert_eq!(" Overdue ".parse::<FollowUpStatus>(), Ok(FollowUpStatus::Overdue));
        assert_eq!(
            "done".parse::<FollowUpStatus>(),
            Err(ModelError::UnknownFollowUpStatus("done".to_string()))
        );
    }
}
