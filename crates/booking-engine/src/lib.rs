//! # booking-engine
//!
//! Availability and permission evaluation for court booking requests.
//!
//! Given read-only snapshots from the club backend (request templates,
//! members with per-venue permission windows, venues) the engine answers
//! whether a date × time cell is open under a template and whether a member
//! may request a booking at a venue. Every operation is a pure function.
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` clock times, inclusive time ranges, date parsing
//! - [`template`] — Request templates, their date sequence, open-cell checks
//! - [`permission`] — Member permission windows and request checks
//! - [`slots`] — Open and bookable slot listings
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod permission;
pub mod slots;
pub mod template;

pub use clock::{parse_date, ClockTime, TimeRange};
pub use error::BookingError;
pub use permission::{
    can_make_request, permitted_ranges, weekday_index, MemberType, RequestedSlot, User, Venue,
    VenuePermission, WeekdayTimeRanges,
};
pub use slots::{bookable_slots, open_slots, OpenSlot};
pub use template::{is_available_request, template_dates, DateTimeSetting, RequestTemplate};
