//! Overlap validation for reservation admission
//!
//! Pure functions over a same-date set of reservations. The caller is
//! responsible for fetching exactly the candidate's date (`find_by_date`);
//! nothing here looks at `Reservation::date`.

use crate::domain::error::{DomainError, DomainResult};

use super::model::{Reservation, TimeSlot};

/// First reservation in scan order whose slot overlaps `candidate`.
pub fn find_conflict<'a>(
    candidate: &TimeSlot,
    existing: &'a [Reservation],
) -> Option<&'a Reservation> {
    existing.iter().find(|r| r.slot.overlaps(candidate))
}

/// Admission check: `Err(OverlapConflict)` naming the conflicting
/// reservation, `Ok(())` when the slot is free.
pub fn ensure_no_conflict(candidate: &TimeSlot, existing: &[Reservation]) -> DomainResult<()> {
    match find_conflict(candidate, existing) {
        Some(conflict) => Err(DomainError::OverlapConflict {
            reservation_id: conflict.id,
            start: conflict.slot.start,
            end: conflict.slot.end,
        }),
        None => Ok(()),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slot(sh: u32, sm: u32, eh: u32, em: u32) -> TimeSlot {
        TimeSlot::new(t(sh, sm), t(eh, em)).unwrap()
    }

    fn reservation(id: i32, slot: TimeSlot) -> Reservation {
        Reservation {
            id,
            user_id: 1,
            user_name: "Member 1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            slot,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_day_has_no_conflict() {
        assert!(ensure_no_conflict(&slot(9, 0, 10, 0), &[]).is_ok());
    }

    #[test]
    fn free_slot_between_reservations_is_admitted() {
        let existing = vec![
            reservation(1, slot(8, 0, 9, 0)),
            reservation(2, slot(11, 0, 12, 0)),
        ];
        assert!(ensure_no_conflict(&slot(9, 0, 11, 0), &existing).is_ok());
    }

    #[test]
    fn conflict_names_the_colliding_reservation() {
        let existing = vec![
            reservation(7, slot(9, 0, 10, 0)),
            reservation(8, slot(13, 0, 14, 0)),
        ];

        let err = ensure_no_conflict(&slot(13, 30, 15, 0), &existing).unwrap_err();
        assert_eq!(
            err,
            DomainError::OverlapConflict {
                reservation_id: 8,
                start: t(13, 0),
                end: t(14, 0),
            }
        );
    }

    #[test]
    fn first_conflict_in_scan_order_wins() {
        let existing = vec![
            reservation(1, slot(9, 0, 11, 0)),
            reservation(2, slot(10, 0, 12, 0)),
        ];

        // overlaps both, the first one is reported
        let conflict = find_conflict(&slot(10, 30, 11, 30), &existing).unwrap();
        assert_eq!(conflict.id, 1);
    }

    #[test]
    fn touching_reservation_is_not_a_conflict() {
        let existing = vec![reservation(1, slot(9, 0, 10, 0))];
        assert!(ensure_no_conflict(&slot(10, 0, 11, 0), &existing).is_ok());
        assert!(ensure_no_conflict(&slot(8, 0, 9, 0), &existing).is_ok());
    }
}
