use argon2::password_hash::rand_core::{OsRng, RngCore};
use chrono::{NaiveDate, NaiveTime};

use crate::entities::sea_orm_active_enums::AppointmentStatus;

pub const SLOT_MINUTES: i64 = 30;

pub fn default_work_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

pub fn default_work_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap()
}

/// Accepts `HH:MM`; a trailing `:SS` part is tolerated and ignored.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.get(..5).unwrap_or(value);
    NaiveTime::parse_from_str(trimmed, "%H:%M").ok()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Half-hour grid over the working window, end bound included.
pub fn slot_grid(start: NaiveTime, end: NaiveTime) -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    let mut current = start;
    while current <= end {
        slots.push(current);
        let (next, wrapped) =
            current.overflowing_add_signed(chrono::Duration::minutes(SLOT_MINUTES));
        if wrapped != 0 {
            break;
        }
        current = next;
    }
    slots
}

/// A slot is taken when it falls inside a booked [start, end) window.
pub fn slot_taken(slot: NaiveTime, booked: &[(NaiveTime, NaiveTime)]) -> bool {
    booked.iter().any(|(start, end)| {
        if end <= start {
            // Zero-length or inverted window; only the exact start collides.
            slot == *start
        } else {
            *start <= slot && slot < *end
        }
    })
}

pub fn available_slots(
    work_start: Option<NaiveTime>,
    work_end: Option<NaiveTime>,
    booked: &[(NaiveTime, NaiveTime)],
) -> Vec<String> {
    let start = work_start.unwrap_or_else(default_work_start);
    let end = work_end.unwrap_or_else(default_work_end);
    slot_grid(start, end)
        .into_iter()
        .filter(|slot| !slot_taken(*slot, booked))
        .map(format_time)
        .collect()
}

pub fn can_transition(from: AppointmentStatus, to: AppointmentStatus) -> bool {
    use AppointmentStatus::*;
    if from == to {
        return true;
    }
    match from {
        Scheduled => matches!(to, Confirmed | InProgress | Cancelled | NoShow | Rescheduled),
        Confirmed => matches!(to, InProgress | Completed | Cancelled | NoShow | Rescheduled),
        InProgress => matches!(to, Completed | Cancelled),
        Rescheduled => matches!(to, Confirmed | InProgress | Cancelled | NoShow),
        Completed | Cancelled | NoShow => false,
    }
}

pub fn generate_appointment_number(date: NaiveDate) -> String {
    let suffix = OsRng.next_u32() % 10_000;
    format!("APT-{}-{:04}", date.format("%Y%m%d"), suffix)
}
