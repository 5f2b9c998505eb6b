//! Recurring request templates and the date × time cells they open.
//!
//! A template spans an inclusive date range and lists the time slots offered
//! on each day. Which cells are actually open is encoded compactly as
//! `(date index, time index)` pairs into the derived date sequence and the
//! slot list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{BookingError, Result};

/// One open cell, as positions into [`template_dates`] and `time_slots`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimeSetting {
    pub date: usize,
    pub time: usize,
}

/// A recurring booking offer over a date span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTemplate {
    /// First day of the span.
    pub st_date: NaiveDate,
    /// Last day of the span (inclusive).
    pub et_date: NaiveDate,
    /// Time-slot labels offered on every day, in display order.
    pub time_slots: Vec<ClockTime>,
    #[serde(default)]
    pub date_time_settings: Vec<DateTimeSetting>,
}

impl RequestTemplate {
    /// Position of `date` in the template's date sequence.
    ///
    /// Computed arithmetically; equivalent to searching [`template_dates`].
    pub fn date_index(&self, date: NaiveDate) -> Option<usize> {
        if date < self.st_date || date > self.et_date {
            return None;
        }
        usize::try_from((date - self.st_date).num_days()).ok()
    }

    /// Position of the first slot equal to `time`.
    pub fn time_index(&self, time: ClockTime) -> Option<usize> {
        self.time_slots.iter().position(|&slot| slot == time)
    }

    /// Number of days in the span, zero when the span is inverted.
    pub fn day_count(&self) -> usize {
        if self.st_date > self.et_date {
            return 0;
        }
        (self.et_date - self.st_date).num_days() as usize + 1
    }

    /// Check the structural invariants, reporting the first violation.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidTemplate` when the span is inverted, a
    /// time slot is listed twice, or a setting points outside the template.
    pub fn validate(&self) -> Result<()> {
        if self.st_date > self.et_date {
            return Err(BookingError::InvalidTemplate(format!(
                "start date {} is after end date {}",
                self.st_date, self.et_date
            )));
        }

        for (i, slot) in self.time_slots.iter().enumerate() {
            if self.time_slots[..i].contains(slot) {
                return Err(BookingError::InvalidTemplate(format!(
                    "time slot {} is listed more than once",
                    slot
                )));
            }
        }

        let days = self.day_count();
        for setting in &self.date_time_settings {
            if setting.date >= days {
                return Err(BookingError::InvalidTemplate(format!(
                    "date index {} is outside the {} day span",
                    setting.date, days
                )));
            }
            if setting.time >= self.time_slots.len() {
                return Err(BookingError::InvalidTemplate(format!(
                    "time index {} is outside the {} time slots",
                    setting.time,
                    self.time_slots.len()
                )));
            }
        }

        Ok(())
    }
}

/// Every date from `st_date` to `et_date` inclusive, in order.
///
/// Empty when the span is inverted.
pub fn template_dates(template: &RequestTemplate) -> Vec<NaiveDate> {
    template
        .st_date
        .iter_days()
        .take_while(|day| *day <= template.et_date)
        .collect()
}

/// Whether the `(date, time)` cell is open for booking under `template`.
///
/// A date outside the span or a time that is not one of the template's
/// slots is never open.
pub fn is_available_request(template: &RequestTemplate, date: NaiveDate, time: ClockTime) -> bool {
    let (Some(date_index), Some(time_index)) = (template.date_index(date), template.time_index(time))
    else {
        return false;
    };

    template
        .date_time_settings
        .iter()
        .any(|s| s.date == date_index && s.time == time_index)
}
