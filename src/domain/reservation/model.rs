//! Reservation domain entity and time slot model

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::domain::error::{DomainError, DomainResult};

/// Half-open time interval `[start, end)` within a single calendar date.
///
/// Slots never span midnight. Two slots conflict iff
/// `a.start < b.end && b.start < a.end`; back-to-back slots
/// (`a.end == b.start`) do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Build a slot, rejecting empty and reversed intervals.
    pub fn new(start: NaiveTime, end: NaiveTime) -> DomainResult<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(DomainError::InvalidInterval { start, end })
        }
    }

    /// Half-open overlap test. Symmetric.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Admitted reservation of the shared workstation
#[derive(Debug, Clone)]
pub struct Reservation {
    /// Unique reservation ID
    pub id: i32,
    /// Owning user ID
    pub user_id: i32,
    /// Owning user display name (joined for presentation)
    pub user_name: String,
    /// Calendar date the slot belongs to
    pub date: NaiveDate,
    /// Reserved time slot
    pub slot: TimeSlot,
    /// When the reservation was admitted
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// The instant this reservation stops being relevant.
    pub fn end_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.slot.end)
    }

    /// True while the reservation's end has not yet passed.
    ///
    /// An in-progress reservation (started, not ended) still counts.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.end_datetime() > now
    }
}

/// Input for admitting a new reservation. The slot is already validated.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub user_id: i32,
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slot(sh: u32, sm: u32, eh: u32, em: u32) -> TimeSlot {
        TimeSlot::new(t(sh, sm), t(eh, em)).unwrap()
    }

    fn reservation_on(date: NaiveDate, slot: TimeSlot) -> Reservation {
        Reservation {
            id: 1,
            user_id: 1,
            user_name: "Member 1".to_string(),
            date,
            slot,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn slot_accepts_ordered_bounds() {
        let s = TimeSlot::new(t(9, 0), t(10, 0)).unwrap();
        assert_eq!(s.start, t(9, 0));
        assert_eq!(s.end, t(10, 0));
    }

    #[test]
    fn slot_rejects_equal_bounds() {
        let err = TimeSlot::new(t(9, 0), t(9, 0)).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidInterval {
                start: t(9, 0),
                end: t(9, 0)
            }
        );
    }

    #[test]
    fn slot_rejects_reversed_bounds() {
        assert!(TimeSlot::new(t(10, 0), t(9, 0)).is_err());
    }

    #[test]
    fn overlap_at_start_detected() {
        // candidate begins inside the existing slot
        let existing = slot(9, 0, 11, 0);
        let candidate = slot(10, 0, 12, 0);
        assert!(candidate.overlaps(&existing));
    }

    #[test]
    fn overlap_at_end_detected() {
        // candidate ends inside the existing slot
        let existing = slot(10, 0, 12, 0);
        let candidate = slot(9, 0, 11, 0);
        assert!(candidate.overlaps(&existing));
    }

    #[test]
    fn containment_detected() {
        let outer = slot(9, 0, 12, 0);
        let inner = slot(10, 0, 11, 0);
        assert!(inner.overlaps(&outer));
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = slot(9, 0, 11, 0);
        let b = slot(10, 0, 12, 0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));

        let c = slot(13, 0, 14, 0);
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    #[test]
    fn touching_slots_do_not_overlap() {
        let morning = slot(9, 0, 10, 0);
        let next = slot(10, 0, 11, 0);
        assert!(!morning.overlaps(&next));
        assert!(!next.overlaps(&morning));
    }

    #[test]
    fn disjoint_slots_do_not_overlap() {
        let a = slot(9, 0, 10, 0);
        let b = slot(14, 0, 15, 0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn upcoming_until_end_passes() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        let ended = reservation_on(now.date(), slot(8, 0, 9, 0));
        assert!(!ended.is_upcoming(now));

        // started but not finished
        let in_progress = reservation_on(now.date(), slot(10, 0, 11, 0));
        assert!(in_progress.is_upcoming(now));

        let later = reservation_on(now.date(), slot(14, 0, 15, 0));
        assert!(later.is_upcoming(now));

        let yesterday = reservation_on(now.date() - Duration::days(1), slot(14, 0, 15, 0));
        assert!(!yesterday.is_upcoming(now));

        let tomorrow = reservation_on(now.date() + Duration::days(1), slot(8, 0, 9, 0));
        assert!(tomorrow.is_upcoming(now));
    }

    #[test]
    fn end_datetime_combines_date_and_slot_end() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let r = reservation_on(date, slot(9, 0, 10, 30));
        assert_eq!(r.end_datetime(), date.and_hms_opt(10, 30, 0).unwrap());
    }
}
