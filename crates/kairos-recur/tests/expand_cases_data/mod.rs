use chrono::NaiveDate;
use uuid::Uuid;

use crate::recur::expand::expand_occurrences;
use crate::recur::item::{ItemDetail, ItemKind, PlannerItem};
use crate::recur::rule::{
    DayOfMonth, EndCondition, ExceptionDates, Interval, MonthOfYear, RecurrenceRule, WeekdaySet,
};
use crate::recur::window::DateWindow;
use kairos_core::types::Weekday;

pub struct ExpandCase {
    pub name: &'static str,
    pub rule: RecurrenceRule,
    pub anchor: &'static str,
    pub window: (&'static str, &'static str),
    pub expected: &'static [&'static str],
}

fn parse_date(s: &str) -> NaiveDate {
    s.parse().unwrap_or_else(|_| panic!("bad case date {s}"))
}

fn nonzero(n: u32) -> std::num::NonZeroU32 {
    std::num::NonZeroU32::new(n).unwrap_or_else(|| panic!("bad case count {n}"))
}

fn every(n: u32) -> Interval {
    Interval::new(n).unwrap_or_else(|_| panic!("bad case interval {n}"))
}

#[expect(clippy::too_many_lines)]
pub fn expand_cases() -> Vec<ExpandCase> {
    vec![
        ExpandCase {
            name: "daily_every_other_day",
            rule: RecurrenceRule::daily(every(2)),
            anchor: "2026-02-01",
            window: ("2026-02-01", "2026-02-10"),
            expected: &[
                "2026-02-01",
                "2026-02-03",
                "2026-02-05",
                "2026-02-07",
                "2026-02-09",
            ],
        },
        ExpandCase {
            name: "daily_window_far_from_anchor_keeps_phase",
            rule: RecurrenceRule::daily(every(3)),
            anchor: "2026-01-01",
            window: ("2026-01-20", "2026-01-31"),
            expected: &["2026-01-22", "2026-01-25", "2026-01-28", "2026-01-31"],
        },
        ExpandCase {
            name: "weekly_two_weekdays",
            rule: RecurrenceRule::weekly(
                every(1),
                WeekdaySet::of(&[Weekday::Tuesday, Weekday::Thursday]),
            ),
            anchor: "2026-02-03",
            window: ("2026-02-01", "2026-02-14"),
            expected: &["2026-02-03", "2026-02-05", "2026-02-10", "2026-02-12"],
        },
        ExpandCase {
            name: "weekly_alternate_mondays",
            // Anchored on a Monday over ten weeks: every other Monday, never
            // the intervening ones.
            rule: RecurrenceRule::weekly(every(2), WeekdaySet::of(&[Weekday::Monday])),
            anchor: "2026-02-02",
            window: ("2026-02-02", "2026-04-12"),
            expected: &[
                "2026-02-02",
                "2026-02-16",
                "2026-03-02",
                "2026-03-16",
                "2026-03-30",
            ],
        },
        ExpandCase {
            name: "weekly_anchor_not_on_matching_weekday",
            rule: RecurrenceRule::weekly(every(1), WeekdaySet::of(&[Weekday::Friday])),
            anchor: "2026-02-01",
            window: ("2026-02-01", "2026-02-21"),
            expected: &["2026-02-06", "2026-02-13", "2026-02-20"],
        },
        ExpandCase {
            name: "monthly_31st_clamps_to_short_months",
            rule: RecurrenceRule::monthly(every(1), DayOfMonth::new(31).ok()),
            anchor: "2026-01-31",
            window: ("2026-01-31", "2026-03-31"),
            expected: &["2026-01-31", "2026-02-28", "2026-03-31"],
        },
        ExpandCase {
            name: "monthly_31st_clamps_to_leap_february",
            rule: RecurrenceRule::monthly(every(1), DayOfMonth::new(31).ok()),
            anchor: "2024-01-31",
            window: ("2024-01-31", "2024-03-31"),
            expected: &["2024-01-31", "2024-02-29", "2024-03-31"],
        },
        ExpandCase {
            name: "yearly_leap_day_clamps_in_common_years",
            rule: RecurrenceRule::yearly(
                every(1),
                MonthOfYear::new(2).ok(),
                DayOfMonth::new(29).ok(),
            ),
            anchor: "2024-02-29",
            window: ("2024-01-01", "2028-12-31"),
            expected: &[
                "2024-02-29",
                "2025-02-28",
                "2026-02-28",
                "2027-02-28",
                "2028-02-29",
            ],
        },
        ExpandCase {
            name: "after_count_with_exception_keeps_budget",
            rule: RecurrenceRule::daily(every(1))
                .with_end(EndCondition::AfterCount { count: nonzero(5) })
                .with_exceptions(ExceptionDates::from_dates([parse_date("2026-04-03")])),
            anchor: "2026-04-01",
            window: ("2026-04-01", "2026-04-30"),
            expected: &[
                "2026-04-01",
                "2026-04-02",
                "2026-04-04",
                "2026-04-05",
                "2026-04-06",
            ],
        },
        ExpandCase {
            name: "until_date_includes_candidate_on_boundary",
            rule: RecurrenceRule::daily(every(2)).with_end(EndCondition::UntilDate {
                date: parse_date("2026-02-05"),
            }),
            anchor: "2026-02-01",
            window: ("2026-02-01", "2026-02-28"),
            expected: &["2026-02-01", "2026-02-03", "2026-02-05"],
        },
        ExpandCase {
            name: "weekly_empty_set_is_empty",
            rule: RecurrenceRule::weekly(every(1), WeekdaySet::EMPTY),
            anchor: "2026-02-01",
            window: ("2026-01-01", "2026-12-31"),
            expected: &[],
        },
        ExpandCase {
            name: "monthly_without_day_is_empty",
            rule: RecurrenceRule::monthly(every(1), None),
            anchor: "2026-02-01",
            window: ("2026-01-01", "2026-12-31"),
            expected: &[],
        },
        ExpandCase {
            name: "custom_is_empty",
            rule: RecurrenceRule::custom(),
            anchor: "2026-02-01",
            window: ("2026-01-01", "2026-12-31"),
            expected: &[],
        },
        ExpandCase {
            name: "window_entirely_before_anchor_is_empty",
            rule: RecurrenceRule::daily(every(1)),
            anchor: "2026-06-01",
            window: ("2026-01-01", "2026-05-31"),
            expected: &[],
        },
        ExpandCase {
            name: "yearly_multi_year_interval",
            rule: RecurrenceRule::yearly(
                every(2),
                MonthOfYear::new(7).ok(),
                DayOfMonth::new(4).ok(),
            ),
            anchor: "2026-07-04",
            window: ("2026-01-01", "2032-12-31"),
            expected: &["2026-07-04", "2028-07-04", "2030-07-04", "2032-07-04"],
        },
    ]
}

pub fn assert_case(case: &ExpandCase) {
    let anchor = parse_date(case.anchor);
    let window = DateWindow::new(parse_date(case.window.0), parse_date(case.window.1))
        .unwrap_or_else(|e| panic!("case {}: bad window: {e}", case.name));
    let item = PlannerItem::new(
        Uuid::nil(),
        ItemKind::Task,
        ItemDetail::titled(case.name.to_string()),
    )
    .with_anchor(anchor)
    .with_recurrence(case.rule.clone());

    let occurrences = expand_occurrences(&item, window);
    let got: Vec<String> = occurrences
        .iter()
        .map(|o| o.occurrence_date.to_string())
        .collect();
    assert_eq!(got, case.expected, "case {}", case.name);

    // Shared invariants: strictly increasing dates, stable composite ids,
    // everything inside the window, and value-equal on a second call.
    for pair in occurrences.windows(2) {
        assert!(
            pair[0].occurrence_date < pair[1].occurrence_date,
            "case {}: dates not strictly increasing",
            case.name
        );
    }
    for occurrence in &occurrences {
        assert!(window.contains(occurrence.occurrence_date), "case {}", case.name);
        assert_eq!(
            occurrence.occurrence_id,
            format!("{}_{}", occurrence.source_id, occurrence.occurrence_date),
            "case {}: occurrence id drifted from its contract",
            case.name
        );
        assert!(occurrence.occurrence_date >= anchor, "case {}", case.name);
    }
    assert_eq!(
        occurrences,
        expand_occurrences(&item, window),
        "case {}: expansion is not deterministic",
        case.name
    );
}
