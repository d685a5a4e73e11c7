//! Meeting-time model and normalization.
//!
//! Raw catalog meeting records carry a day code, "HHMM" clock strings, and
//! an AM/PM code. Normalization maps them onto a single linear minute scale
//! spanning the week, so that every downstream comparison (overlap, travel
//! gap, earliest-meeting ordering) is integer arithmetic on one axis.
//!
//! # Time Model
//!
//! Minutes on a Monday-origin weekly scale: `day*1440 + hour*60 + minute`,
//! valid range 0..10079. [`WEEK_MINUTES`] (10080) is the end-of-week
//! sentinel used as the "earliest meeting time" of a section with no
//! concrete meetings, so fully-online sections order after everything else.

use serde::{Deserialize, Serialize};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Minutes in one week; also the earliest-meeting sentinel for sections
/// with no concrete meetings.
pub const WEEK_MINUTES: i32 = 10080;

/// Day of week, Monday-origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Parses a catalog day code (`M`, `T`, `W`, `TH`, `F`, `S`, `U`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Monday),
            "T" => Some(Self::Tuesday),
            "W" => Some(Self::Wednesday),
            "TH" => Some(Self::Thursday),
            "F" => Some(Self::Friday),
            "S" => Some(Self::Saturday),
            "U" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Day index on the weekly scale (Monday = 0).
    #[inline]
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Inverse of [`Self::index`].
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Monday),
            1 => Some(Self::Tuesday),
            2 => Some(Self::Wednesday),
            3 => Some(Self::Thursday),
            4 => Some(Self::Friday),
            5 => Some(Self::Saturday),
            6 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Three-letter display name.
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Monday => "MON",
            Self::Tuesday => "TUE",
            Self::Wednesday => "WED",
            Self::Thursday => "THU",
            Self::Friday => "FRI",
            Self::Saturday => "SAT",
            Self::Sunday => "SUN",
        }
    }
}

/// A raw meeting-time record as delivered by the catalog.
///
/// `start_time`/`end_time` are "HHMM" clock strings or null; a null on
/// either side means the meeting has no concrete time (online/asynchronous
/// content). `pm_code` is `"A"` or `"P"` and applies to both clock strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMeetingTime {
    pub meeting_day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub pm_code: Option<String>,
    pub campus_name: String,
    pub building_code: String,
    pub room_number: String,
    pub meeting_mode_desc: String,
}

impl RawMeetingTime {
    /// Creates a concrete meeting record.
    pub fn new(day: &str, start: &str, end: &str, pm_code: &str) -> Self {
        Self {
            meeting_day: Some(day.to_string()),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            pm_code: Some(pm_code.to_string()),
            ..Self::default()
        }
    }

    /// Creates an asynchronous (no concrete time) record.
    pub fn asynchronous(mode_desc: impl Into<String>) -> Self {
        Self {
            meeting_mode_desc: mode_desc.into(),
            ..Self::default()
        }
    }

    /// Sets the campus name.
    pub fn with_campus(mut self, campus: impl Into<String>) -> Self {
        self.campus_name = campus.into();
        self
    }

    /// Sets building and room.
    pub fn with_room(mut self, building: impl Into<String>, room: impl Into<String>) -> Self {
        self.building_code = building.into();
        self.room_number = room.into();
        self
    }

    /// Whether this record has no concrete meeting time.
    #[inline]
    pub fn is_asynchronous(&self) -> bool {
        self.start_time.is_none() || self.end_time.is_none()
    }
}

/// Where a meeting takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub campus: String,
    pub building: String,
    pub room: String,
}

/// How a meeting is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingMode {
    /// True only for meetings without a concrete time; such meetings never
    /// produce an interval, so normalized intervals always carry `false`.
    pub asynchronous: bool,
    pub description: String,
}

/// A single recurring weekly time block of a section.
///
/// Invariants: `start_minute <= end_minute`, both within 0..[`WEEK_MINUTES`].
/// Within a section, intervals are sorted ascending by `start_minute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInterval {
    pub start_minute: i32,
    pub end_minute: i32,
    pub location: Location,
    pub mode: MeetingMode,
}

impl MeetingInterval {
    /// Duration of this meeting (minutes).
    #[inline]
    pub fn duration_minutes(&self) -> i32 {
        self.end_minute - self.start_minute
    }

    /// Normalizes a raw record onto the weekly minute scale.
    ///
    /// Returns `None` for asynchronous records (no concrete time) and for
    /// malformed records. If the computed end precedes the computed start —
    /// a class crossing noon without the PM code reflecting it — the end is
    /// re-derived with the PM offset; a record still inverted after that
    /// correction is dropped rather than yielding a negative duration.
    pub fn from_raw(raw: &RawMeetingTime) -> Option<Self> {
        let (start_str, end_str) = match (&raw.start_time, &raw.end_time) {
            (Some(s), Some(e)) => (s, e),
            _ => return None, // online/asynchronous content
        };
        let day = raw.meeting_day.as_deref().and_then(Weekday::from_code);
        let pm = raw.pm_code.as_deref();
        let (day, pm) = match (day, pm) {
            (Some(d), Some(p @ ("A" | "P"))) => (d, p),
            _ => {
                log::warn!(
                    "dropping meeting with unrecognized day/pm code: {:?}/{:?}",
                    raw.meeting_day,
                    raw.pm_code
                );
                return None;
            }
        };

        let start = minute_of_week(day, start_str, pm)?;
        let mut end = minute_of_week(day, end_str, pm)?;
        if end < start {
            // Hidden AM->PM crossing: re-derive the end in the PM half.
            end = minute_of_week(day, end_str, "P")?;
        }
        if end < start {
            log::warn!(
                "dropping meeting with inverted times after PM correction: {start_str}-{end_str}"
            );
            return None;
        }

        Some(Self {
            start_minute: start,
            end_minute: end,
            location: Location {
                campus: raw.campus_name.clone(),
                building: raw.building_code.clone(),
                room: raw.room_number.clone(),
            },
            mode: MeetingMode {
                asynchronous: false,
                description: raw.meeting_mode_desc.clone(),
            },
        })
    }
}

/// Maps a day + "HHMM" clock string + AM/PM code onto the weekly scale.
///
/// Hours are taken modulo 12 and the PM code adds the 12-hour offset, so
/// "1230" with `"P"` is minute 750 of the day.
pub fn minute_of_week(day: Weekday, hhmm: &str, pm_code: &str) -> Option<i32> {
    if hhmm.len() < 4 {
        return None;
    }
    let hours: i32 = hhmm.get(0..2)?.parse().ok()?;
    let minutes: i32 = hhmm.get(2..4)?.parse().ok()?;
    if !(0..60).contains(&minutes) {
        return None;
    }
    let pm_offset = if pm_code == "P" { 12 } else { 0 };
    Some(day.index() * MINUTES_PER_DAY + (pm_offset + hours % 12) * 60 + minutes)
}

/// A desired time window on the weekly scale, used for scoring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_minute: i32,
    pub end_minute: i32,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(start_minute: i32, end_minute: i32) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Overlap with a meeting interval, clipped at zero.
    pub fn overlap_minutes(&self, interval: &MeetingInterval) -> i32 {
        let overlap =
            self.end_minute.min(interval.end_minute) - self.start_minute.max(interval.start_minute);
        overlap.max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_codes() {
        assert_eq!(Weekday::from_code("M"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_code("TH"), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_code("U"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_code("X"), None);
        assert_eq!(Weekday::Wednesday.index(), 2);
        assert_eq!(Weekday::Saturday.abbrev(), "SAT");
    }

    #[test]
    fn test_minute_of_week_encoding() {
        // Mon 9:00 AM = 540
        assert_eq!(minute_of_week(Weekday::Monday, "0900", "A"), Some(540));
        // Tue 1:10 PM = 1440 + 13*60 + 10
        assert_eq!(minute_of_week(Weekday::Tuesday, "0110", "P"), Some(2230));
        // 12:30 PM: hour 12 % 12 = 0, PM offset puts it at 750
        assert_eq!(minute_of_week(Weekday::Monday, "1230", "P"), Some(750));
        // 12:05 AM is five past midnight
        assert_eq!(minute_of_week(Weekday::Monday, "1205", "A"), Some(5));
        assert_eq!(minute_of_week(Weekday::Monday, "9x0", "A"), None);
        assert_eq!(minute_of_week(Weekday::Monday, "0990", "A"), None);
    }

    #[test]
    fn test_normalize_concrete_meeting() {
        let raw = RawMeetingTime::new("W", "1020", "1140", "A")
            .with_campus("BUSCH")
            .with_room("SEC", "111");
        let interval = MeetingInterval::from_raw(&raw).unwrap();
        assert_eq!(interval.start_minute, 2 * MINUTES_PER_DAY + 620);
        assert_eq!(interval.duration_minutes(), 80);
        assert_eq!(interval.location.campus, "BUSCH");
        assert!(!interval.mode.asynchronous);
    }

    #[test]
    fn test_normalize_noon_crossing_corrects_end() {
        // 11:00 AM to 12:15: naive end (15) precedes start (660), so the
        // end is re-derived in the PM half.
        let raw = RawMeetingTime::new("M", "1100", "1215", "A");
        let interval = MeetingInterval::from_raw(&raw).unwrap();
        assert_eq!(interval.start_minute, 660);
        assert_eq!(interval.end_minute, 735);
        assert!(interval.duration_minutes() > 0);
    }

    #[test]
    fn test_normalize_drops_still_inverted() {
        // 10 PM to 9 PM stays inverted after the correction re-derives the
        // same PM end; the record is dropped, never a negative duration.
        let raw = RawMeetingTime::new("F", "1000", "0900", "P");
        assert!(MeetingInterval::from_raw(&raw).is_none());
    }

    #[test]
    fn test_normalize_asynchronous_is_none() {
        let raw = RawMeetingTime::asynchronous("ONLINE INSTRUCTION(INTERNET)");
        assert!(raw.is_asynchronous());
        assert!(MeetingInterval::from_raw(&raw).is_none());
    }

    #[test]
    fn test_normalize_unknown_day_dropped() {
        let raw = RawMeetingTime::new("XX", "0900", "1000", "A");
        assert!(MeetingInterval::from_raw(&raw).is_none());
    }

    #[test]
    fn test_time_range_overlap() {
        let range = TimeRange::new(600, 1000);
        let meeting = |s, e| MeetingInterval {
            start_minute: s,
            end_minute: e,
            location: Location {
                campus: String::new(),
                building: String::new(),
                room: String::new(),
            },
            mode: MeetingMode {
                asynchronous: false,
                description: String::new(),
            },
        };
        assert_eq!(range.overlap_minutes(&meeting(500, 700)), 100);
        assert_eq!(range.overlap_minutes(&meeting(700, 900)), 200);
        assert_eq!(range.overlap_minutes(&meeting(1200, 1300)), 0); // disjoint clips to zero
        assert_eq!(range.overlap_minutes(&meeting(0, 10080)), 400);
    }

    #[test]
    fn test_raw_meeting_time_wire_shape() {
        let json = r#"{
            "meetingDay": "TH",
            "startTime": "0140",
            "endTime": "0300",
            "pmCode": "P",
            "campusName": "LIVINGSTON",
            "buildingCode": "BE",
            "roomNumber": "250",
            "meetingModeDesc": "LEC"
        }"#;
        let raw: RawMeetingTime = serde_json::from_str(json).unwrap();
        assert_eq!(raw.meeting_day.as_deref(), Some("TH"));
        assert!(!raw.is_asynchronous());
        let interval = MeetingInterval::from_raw(&raw).unwrap();
        assert_eq!(interval.start_minute, 3 * MINUTES_PER_DAY + 13 * 60 + 40);
    }
}
