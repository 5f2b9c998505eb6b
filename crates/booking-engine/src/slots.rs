//! Concrete slot listings built from a template and, optionally, a member's
//! permission windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::clock::ClockTime;
use crate::permission::{can_make_request, RequestedSlot, User, Venue};
use crate::template::{template_dates, RequestTemplate};

/// An open date × time cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OpenSlot {
    pub date: NaiveDate,
    pub time: ClockTime,
}

/// Every open cell of `template`, sorted by date then time.
///
/// Settings that point outside the date span or the slot list are skipped,
/// and repeated settings yield one slot.
pub fn open_slots(template: &RequestTemplate) -> Vec<OpenSlot> {
    let dates = template_dates(template);

    let mut slots: Vec<OpenSlot> = template
        .date_time_settings
        .iter()
        .filter_map(|s| {
            Some(OpenSlot {
                date: *dates.get(s.date)?,
                time: *template.time_slots.get(s.time)?,
            })
        })
        .collect();

    slots.sort();
    slots.dedup();

    trace!(
        settings = template.date_time_settings.len(),
        open = slots.len(),
        "listed open slots"
    );
    slots
}

/// Open cells of `template` that `user` may also request at `venue`.
pub fn bookable_slots(template: &RequestTemplate, user: &User, venue: &Venue) -> Vec<OpenSlot> {
    open_slots(template)
        .into_iter()
        .filter(|s| can_make_request(user, venue, s.date, Some(RequestedSlot::At(s.time))))
        .collect()
}
