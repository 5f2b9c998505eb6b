//! Per-venue, per-weekday permission windows for club members.
//!
//! A user's member type grants, for each venue, a list of allowed time
//! ranges per weekday. A request is permitted when the requested time (or
//! requested range) falls inside one of the ranges for the request date's
//! weekday.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{ClockTime, TimeRange};

/// Allowed time ranges for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayTimeRanges {
    /// 0 = Sunday .. 6 = Saturday.
    pub day: u32,
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
}

/// Scheduling permission for a single venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePermission {
    /// Id of the venue this permission applies to.
    pub venue: String,
    #[serde(default)]
    pub allow_sched_time_ranges: Vec<WeekdayTimeRanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub permissions: Vec<VenuePermission>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Users without a member type hold no permissions.
    #[serde(default)]
    pub member_type: Option<MemberType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(alias = "_id")]
    pub id: String,
}

/// What a booking request asks for on its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedSlot {
    /// A single slot starting at the given time.
    At(ClockTime),
    /// A contiguous range that must fit inside one allowed range.
    Within(TimeRange),
}

impl User {
    /// The permission entry for `venue_id`, if the member type grants one.
    pub fn permission_for(&self, venue_id: &str) -> Option<&VenuePermission> {
        self.member_type
            .as_ref()?
            .permissions
            .iter()
            .find(|p| p.venue == venue_id)
    }
}

impl VenuePermission {
    /// Allowed ranges for the given weekday index.
    pub fn ranges_on(&self, weekday: u32) -> Option<&[TimeRange]> {
        self.allow_sched_time_ranges
            .iter()
            .find(|w| w.day == weekday)
            .map(|w| w.time_ranges.as_slice())
    }
}

/// Day of week of `date`, 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// The allowed ranges that apply to `user` at `venue` on `date`.
///
/// `None` when the user has no permission for the venue, or the permission
/// has no entry for the date's weekday.
pub fn permitted_ranges<'a>(user: &'a User, venue: &Venue, date: NaiveDate) -> Option<&'a [TimeRange]> {
    let Some(permission) = user.permission_for(&venue.id) else {
        debug!(venue = %venue.id, "no permission record for venue");
        return None;
    };

    let weekday = weekday_index(date);
    let ranges = permission.ranges_on(weekday);
    if ranges.is_none() {
        debug!(venue = %venue.id, weekday, %date, "venue permission has no entry for weekday");
    }
    ranges
}

/// Whether `user` may request a booking at `venue` on `date`.
///
/// With `RequestedSlot::At`, the time must fall inside some allowed range,
/// bounds included. With `RequestedSlot::Within`, the requested range must
/// be fully contained in a single allowed range; partial overlap is refused.
/// Without a slot there is nothing to evaluate and the answer is `false`.
pub fn can_make_request(
    user: &User,
    venue: &Venue,
    date: NaiveDate,
    slot: Option<RequestedSlot>,
) -> bool {
    let Some(ranges) = permitted_ranges(user, venue, date) else {
        return false;
    };

    match slot {
        Some(RequestedSlot::At(time)) => ranges.iter().any(|r| r.contains_time(time)),
        Some(RequestedSlot::Within(requested)) => {
            ranges.iter().any(|r| r.contains_range(&requested))
        }
        None => false,
    }
}
