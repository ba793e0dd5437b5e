use std::fmt;
use std::str::FromStr;

use crate::error::{TourError, TourResult};

/// Order status stored as a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    Pending = 1,
    Approved = 2,
    Rejected = 3,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::Approved, Status::Rejected];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Status {
    type Err = TourError;

    fn from_str(s: &str) -> TourResult<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| TourError::parse(s, "Status"))
    }
}

impl TryFrom<u8> for Status {
    type Error = TourError;

    fn try_from(value: u8) -> TourResult<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_u8() == value)
            .ok_or_else(|| TourError::out_of_range("Status discriminant", value))
    }
}

/// Days numbered from zero, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn number(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl TryFrom<i32> for DayOfWeek {
    type Error = TourError;

    fn try_from(value: i32) -> TourResult<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|index| DayOfWeek::ALL.get(index).copied())
            .ok_or_else(|| TourError::out_of_range("day number", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_parses_to_one() {
        let status: Status = "Pending".parse().unwrap();
        assert_eq!(status, Status::Pending);
        assert_eq!(status.as_u8(), 1);
    }

    #[test]
    fn test_unknown_name_is_parse_error() {
        let err = "pending".parse::<Status>().unwrap_err();
        assert_eq!(err, TourError::parse("pending", "Status"));
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_round_trips_through_name() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
        assert_eq!(Status::try_from(2).unwrap(), Status::Approved);
        assert!(Status::try_from(0).is_err());
    }

    #[test]
    fn test_day_numbers() {
        assert_eq!(DayOfWeek::Wednesday.number(), 3);
        assert_eq!(DayOfWeek::try_from(1).unwrap(), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::Saturday.to_string(), "Saturday");
        assert!(DayOfWeek::try_from(7).is_err());
        assert!(DayOfWeek::try_from(-1).is_err());
    }
}
