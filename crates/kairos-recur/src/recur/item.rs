//! Planner item and virtual occurrence models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rule::RecurrenceRule;

/// Kind of schedulable planner item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Task,
    Event,
}

impl ItemKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Event => "event",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item priority as stored on the planner record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Display payload of a planner item.
///
/// The engine copies this through verbatim and never validates it; it belongs
/// to the forms and lists that sit outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl ItemDetail {
    /// Creates a detail payload with just a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            category_id: None,
        }
    }
}

/// A stored task or event, as the document layer hands it to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerItem {
    pub id: Uuid,
    pub kind: ItemKind,
    #[serde(flatten)]
    pub detail: ItemDetail,
    /// The schedule's origin point; no occurrence precedes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_anchor: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceRule>,
}

impl PlannerItem {
    /// Creates an unscheduled item.
    #[must_use]
    pub fn new(id: Uuid, kind: ItemKind, detail: ItemDetail) -> Self {
        Self {
            id,
            kind,
            detail,
            schedule_anchor: None,
            recurrence: None,
        }
    }

    /// Sets the schedule anchor date.
    #[must_use]
    pub fn with_anchor(mut self, anchor: NaiveDate) -> Self {
        self.schedule_anchor = Some(anchor);
        self
    }

    /// Sets the recurrence rule.
    #[must_use]
    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }
}

/// One generated repetition of a recurring item.
///
/// Derived and never persisted; it lives for one expansion call. An
/// occurrence carries no recurrence rule of its own, structurally: it is not
/// a new source of recurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualOccurrence {
    /// Stable composite key `"{sourceId}_{YYYY-MM-DD}"`.
    ///
    /// Committed contract: downstream list reconciliation keys off this
    /// string being stable and unique per (parent, date) pair.
    pub occurrence_id: String,
    pub source_id: Uuid,
    pub occurrence_date: NaiveDate,
    pub kind: ItemKind,
    #[serde(flatten)]
    pub detail: ItemDetail,
}

impl VirtualOccurrence {
    /// Materializes the occurrence of `item` on `date`.
    #[must_use]
    pub fn materialize(item: &PlannerItem, date: NaiveDate) -> Self {
        Self {
            occurrence_id: format!("{}_{}", item.id, date.format("%Y-%m-%d")),
            source_id: item.id,
            occurrence_date: date,
            kind: item.kind,
            detail: item.detail.clone(),
        }
    }
}
