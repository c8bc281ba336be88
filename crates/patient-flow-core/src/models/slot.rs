//! Time slot models.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Slot identifier, unique across the whole facility.
pub type SlotId = u32;

/// Format used for slot times in config, reports and CLI output.
pub const SLOT_TIME_FORMAT: &str = "%H:%M";

/// Slot status.
///
/// Transitions run `Free → Booked → Served`. A failed booking rolls
/// `Booked` back to `Free`. Cancellation removes the slot from any state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    Free,
    Booked,
    Served,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SlotStatus::Free => "FREE",
            SlotStatus::Booked => "BOOKED",
            SlotStatus::Served => "SERVED",
        };
        f.write_str(label)
    }
}

/// A bookable interval in one doctor's schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: SlotStatus,
}

impl Slot {
    /// Create a slot in `Free` status.
    pub fn new(id: SlotId, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            id,
            start,
            end,
            status: SlotStatus::Free,
        }
    }

    pub fn is_free(&self) -> bool {
        self.status == SlotStatus::Free
    }
}

/// Parse an `HH:MM` slot time.
pub fn parse_slot_time(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw.trim(), SLOT_TIME_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_free() {
        let slot = Slot::new(
            101,
            parse_slot_time("09:00").unwrap(),
            parse_slot_time("10:00").unwrap(),
        );
        assert!(slot.is_free());
        assert_eq!(slot.status, SlotStatus::Free);
    }

    #[test]
    fn test_parse_slot_time() {
        let t = parse_slot_time(" 09:30 ").unwrap();
        assert_eq!(t.format(SLOT_TIME_FORMAT).to_string(), "09:30");
        assert!(parse_slot_time("9.30am").is_err());
        assert!(parse_slot_time("25:00").is_err());
    }

    #[test]
    fn test_status_display_and_serde() {
        assert_eq!(SlotStatus::Booked.to_string(), "BOOKED");
        let json = serde_json::to_string(&SlotStatus::Served).unwrap();
        assert_eq!(json, "\"SERVED\"");
    }
}
