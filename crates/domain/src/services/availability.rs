//! Seat availability calculation.

/// Remaining seats for an event: capacity minus the current attending
/// count, floored at zero.
///
/// Advisory only. The server does not reject ATTENDING RSVPs once an
/// event is full; clients use this value to gate the action and display
/// remaining seats.
pub fn available_seats(capacity: i32, attending: i64) -> i64 {
    (i64::from(capacity) - attending).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rsvps_leaves_full_capacity() {
        assert_eq!(available_seats(10, 0), 10);
    }

    #[test]
    fn test_attending_reduces_seats() {
        // capacity=10, three ATTENDING responses
        assert_eq!(available_seats(10, 3), 7);
    }

    #[test]
    fn test_flipping_to_unavailable_frees_a_seat() {
        // one of the three flips to UNAVAILABLE
        assert_eq!(available_seats(10, 2), 8);
    }

    #[test]
    fn test_exactly_full() {
        assert_eq!(available_seats(10, 10), 0);
    }

    #[test]
    fn test_never_negative_when_overbooked() {
        // capacity is advisory, so attending can exceed it
        assert_eq!(available_seats(10, 15), 0);
    }

    #[test]
    fn test_equals_difference_when_not_full() {
        for attending in 0..=10 {
            assert_eq!(available_seats(10, attending), 10 - attending);
        }
    }

    #[test]
    fn test_large_capacity() {
        assert_eq!(available_seats(i32::MAX, 1), i64::from(i32::MAX) - 1);
    }
}
