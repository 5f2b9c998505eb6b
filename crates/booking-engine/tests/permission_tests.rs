//! Tests for member permission windows and `can_make_request`.

use booking_engine::permission::{
    can_make_request, permitted_ranges, weekday_index, MemberType, RequestedSlot, User, Venue,
    VenuePermission, WeekdayTimeRanges,
};
use booking_engine::{ClockTime, TimeRange};
use chrono::NaiveDate;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn t(s: &str) -> ClockTime {
    ClockTime::parse(s).unwrap()
}

fn range(st: &str, et: &str) -> TimeRange {
    TimeRange::parse(st, et).unwrap()
}

fn venue(id: &str) -> Venue {
    Venue { id: id.to_string() }
}

fn weekday(day: u32, ranges: &[(&str, &str)]) -> WeekdayTimeRanges {
    WeekdayTimeRanges {
        day,
        time_ranges: ranges.iter().map(|&(st, et)| range(st, et)).collect(),
    }
}

fn user(permissions: Vec<VenuePermission>) -> User {
    User {
        member_type: Some(MemberType {
            name: Some("Full member".to_string()),
            permissions,
        }),
    }
}

/// Member allowed on court-1 Mondays 09:00-10:00 and 18:00-21:00.
fn monday_member() -> User {
    user(vec![VenuePermission {
        venue: "court-1".to_string(),
        allow_sched_time_ranges: vec![weekday(1, &[("09:00", "10:00"), ("18:00", "21:00")])],
    }])
}

// 2024-01-01 is a Monday.
const MONDAY: &str = "2024-01-01";

// ── weekday_index ───────────────────────────────────────────────────────────

#[test]
fn weekday_index_counts_from_sunday() {
    assert_eq!(weekday_index(date("2024-01-07")), 0);
    assert_eq!(weekday_index(date("2024-01-01")), 1);
    assert_eq!(weekday_index(date("2024-01-06")), 6);
}

// ── Single time ─────────────────────────────────────────────────────────────

#[test]
fn time_inside_allowed_range_is_permitted() {
    let slot = Some(RequestedSlot::At(t("09:30")));
    assert!(can_make_request(&monday_member(), &venue("court-1"), date(MONDAY), slot));
}

#[test]
fn time_before_allowed_range_is_refused() {
    let slot = Some(RequestedSlot::At(t("08:59")));
    assert!(!can_make_request(&monday_member(), &venue("court-1"), date(MONDAY), slot));
}

#[test]
fn range_bounds_are_inclusive() {
    let member = monday_member();
    for time in ["09:00", "10:00", "18:00", "21:00"] {
        let slot = Some(RequestedSlot::At(t(time)));
        assert!(
            can_make_request(&member, &venue("court-1"), date(MONDAY), slot),
            "{} should be permitted",
            time
        );
    }
}

#[test]
fn time_matching_any_range_is_permitted() {
    let slot = Some(RequestedSlot::At(t("19:45")));
    assert!(can_make_request(&monday_member(), &venue("court-1"), date(MONDAY), slot));

    let between = Some(RequestedSlot::At(t("12:00")));
    assert!(!can_make_request(&monday_member(), &venue("court-1"), date(MONDAY), between));
}

// ── Time range ──────────────────────────────────────────────────────────────

#[test]
fn contained_range_is_permitted() {
    let slot = Some(RequestedSlot::Within(range("09:15", "09:45")));
    assert!(can_make_request(&monday_member(), &venue("court-1"), date(MONDAY), slot));
}

#[test]
fn partially_outside_range_is_refused() {
    let slot = Some(RequestedSlot::Within(range("08:00", "09:30")));
    assert!(!can_make_request(&monday_member(), &venue("court-1"), date(MONDAY), slot));
}

#[test]
fn range_spanning_two_allowed_ranges_is_refused() {
    let slot = Some(RequestedSlot::Within(range("09:30", "18:30")));
    assert!(!can_make_request(&monday_member(), &venue("court-1"), date(MONDAY), slot));
}

// ── Missing records ─────────────────────────────────────────────────────────

#[test]
fn no_permission_for_venue_is_refused() {
    let slot = Some(RequestedSlot::At(t("09:30")));
    assert!(!can_make_request(&monday_member(), &venue("court-2"), date(MONDAY), slot));
}

#[test]
fn no_entry_for_weekday_is_refused() {
    // 2024-01-02 is a Tuesday.
    let slot = Some(RequestedSlot::At(t("09:30")));
    assert!(!can_make_request(&monday_member(), &venue("court-1"), date("2024-01-02"), slot));
}

#[test]
fn user_without_member_type_is_refused() {
    let guest = User::default();
    let slot = Some(RequestedSlot::At(t("09:30")));
    assert!(!can_make_request(&guest, &venue("court-1"), date(MONDAY), slot));
}

#[test]
fn no_criterion_is_refused() {
    assert!(!can_make_request(&monday_member(), &venue("court-1"), date(MONDAY), None));
}

#[test]
fn empty_ranges_for_weekday_refuse_everything() {
    let member = user(vec![VenuePermission {
        venue: "court-1".to_string(),
        allow_sched_time_ranges: vec![weekday(1, &[])],
    }]);
    let slot = Some(RequestedSlot::At(t("09:30")));
    assert!(!can_make_request(&member, &venue("court-1"), date(MONDAY), slot));
    assert_eq!(permitted_ranges(&member, &venue("court-1"), date(MONDAY)), Some(&[][..]));
}

// ── permitted_ranges ────────────────────────────────────────────────────────

#[test]
fn permitted_ranges_selects_venue_and_weekday() {
    let member = user(vec![
        VenuePermission {
            venue: "court-1".to_string(),
            allow_sched_time_ranges: vec![weekday(1, &[("09:00", "10:00")])],
        },
        VenuePermission {
            venue: "court-2".to_string(),
            allow_sched_time_ranges: vec![
                weekday(1, &[("07:00", "08:00")]),
                weekday(2, &[("12:00", "13:00")]),
            ],
        },
    ]);

    let ranges = permitted_ranges(&member, &venue("court-2"), date(MONDAY)).unwrap();
    assert_eq!(ranges, &[range("07:00", "08:00")]);
    assert!(permitted_ranges(&member, &venue("court-3"), date(MONDAY)).is_none());
}

// ── serde ───────────────────────────────────────────────────────────────────

#[test]
fn deserializes_backend_shape() {
    let json = r#"{
        "memberType": {
            "name": "Junior",
            "permissions": [{
                "venue": "v1",
                "allowSchedTimeRanges": [
                    {"day": 1, "timeRanges": [{"stTime": "09:00", "etTime": "10:00"}]}
                ]
            }]
        }
    }"#;
    let member: User = serde_json::from_str(json).unwrap();
    let venue: Venue = serde_json::from_str(r#"{"_id": "v1"}"#).unwrap();

    assert_eq!(venue.id, "v1");
    assert!(can_make_request(&member, &venue, date(MONDAY), Some(RequestedSlot::At(t("09:30")))));
}

#[test]
fn repeated_calls_agree() {
    let member = monday_member();
    let court = venue("court-1");
    let slot = Some(RequestedSlot::Within(range("18:30", "20:00")));
    let first = can_make_request(&member, &court, date(MONDAY), slot);
    for _ in 0..10 {
        assert_eq!(can_make_request(&member, &court, date(MONDAY), slot), first);
    }
}
