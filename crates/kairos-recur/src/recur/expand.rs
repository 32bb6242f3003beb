//! Instance generator: expands a recurring item into virtual occurrences.

use chrono::{Days, NaiveDate};

use super::calc::{anchor_matches, next_occurrence};
use super::item::{PlannerItem, VirtualOccurrence};
use super::rule::RecurrencePattern;
use super::window::DateWindow;

/// ## Summary
/// Expands `item`'s recurrence rule into the ordered list of virtual
/// occurrences falling inside `window` (both ends inclusive).
///
/// Returns an empty list, never an error, when the item has no rule or
/// anchor, the window ends before the schedule starts, or the rule is
/// degenerate (empty weekday set, missing day/month fields, `Custom`).
/// Output dates are strictly increasing and phase-locked to the anchor
/// regardless of where the window starts; two calls with the same inputs are
/// value-equal.
#[must_use]
pub fn expand_occurrences(item: &PlannerItem, window: DateWindow) -> Vec<VirtualOccurrence> {
    let Some(rule) = item.recurrence.as_ref() else {
        tracing::trace!(item_id = %item.id, "no recurrence rule, nothing to expand");
        return Vec::new();
    };
    let Some(anchor) = item.schedule_anchor else {
        tracing::trace!(item_id = %item.id, "no schedule anchor, nothing to expand");
        return Vec::new();
    };
    if window.end() < anchor {
        tracing::trace!(item_id = %item.id, %anchor, "window ends before schedule starts");
        return Vec::new();
    }
    if !rule.pattern.can_produce() {
        tracing::trace!(item_id = %item.id, "degenerate rule, nothing to expand");
        return Vec::new();
    }

    let Some(mut candidate) = seed_candidate(&rule.pattern, anchor, window.start()) else {
        return Vec::new();
    };

    let mut occurrences = Vec::new();
    let mut emitted: u32 = 0;
    while candidate <= window.end() && !rule.end.has_ended(emitted, candidate) {
        if rule.exceptions.contains(candidate) {
            // Excepted dates are suppressed but do not consume the
            // occurrence-count budget.
            tracing::trace!(%candidate, "candidate excluded by exception date");
        } else {
            occurrences.push(VirtualOccurrence::materialize(item, candidate));
            emitted += 1;
        }
        match next_occurrence(&rule.pattern, candidate) {
            Some(next) => candidate = next,
            None => break,
        }
    }

    tracing::debug!(
        item_id = %item.id,
        count = occurrences.len(),
        "expanded occurrences"
    );
    occurrences
}

/// Locates the first candidate on or after both the anchor and the window
/// start.
///
/// Seeking starts from the anchor and advances by whole rule periods so the
/// interval phase stays locked to the anchor: "every 3rd day from Jan 1"
/// stays on Jan 1, 4, 7, ... even when the window starts Jan 20. `Daily`
/// jumps in closed form; the other variants advance through the calculator.
fn seed_candidate(
    pattern: &RecurrencePattern,
    anchor: NaiveDate,
    window_start: NaiveDate,
) -> Option<NaiveDate> {
    let mut candidate = if anchor_matches(pattern, anchor) {
        anchor
    } else {
        next_occurrence(pattern, anchor)?
    };
    if window_start <= candidate {
        return Some(candidate);
    }

    if let RecurrencePattern::Daily { interval } = *pattern {
        let stride = u64::from(interval.get());
        // window_start > candidate here, so the gap is positive.
        let gap = u64::try_from((window_start - candidate).num_days()).ok()?;
        let jump = gap.div_ceil(stride) * stride;
        return candidate.checked_add_days(Days::new(jump));
    }

    while candidate < window_start {
        candidate = next_occurrence(pattern, candidate)?;
    }
    Some(candidate)
}
