//! Reservation status constants and input validation rules.
//!
//! Validation runs in the API handlers before any store access, so a
//! rejected request never touches the inventory.

use crate::error::CoreError;

/// Reservation is live and holds seats against the inventory.
pub const STATUS_CONFIRMED: &str = "confirmed";

/// Reservation was cancelled and its seats returned to the pool.
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid reservation statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_CONFIRMED, STATUS_CANCELLED];

/// Default per-request seat cap when `MAX_SEATS_PER_REQUEST` is not set.
pub const DEFAULT_MAX_SEATS_PER_REQUEST: i32 = 10;

/// Validate the caller identity attached to a reservation.
pub fn validate_partner_id(partner_id: &str) -> Result<(), CoreError> {
    if partner_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "partnerId is required and must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// Validate a requested seat count against the per-request cap.
pub fn validate_seats(seats: i32, max_per_request: i32) -> Result<(), CoreError> {
    if seats < 1 || seats > max_per_request {
        return Err(CoreError::Validation(format!(
            "seats must be an integer >= 1 and <= {max_per_request}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_partner_id_accepted() {
        assert!(validate_partner_id("partner-42").is_ok());
    }

    #[test]
    fn test_empty_partner_id_rejected() {
        assert!(validate_partner_id("").is_err());
    }

    #[test]
    fn test_whitespace_partner_id_rejected() {
        assert!(validate_partner_id("   ").is_err());
    }

    #[test]
    fn test_seats_within_cap_accepted() {
        assert!(validate_seats(1, DEFAULT_MAX_SEATS_PER_REQUEST).is_ok());
        assert!(validate_seats(10, DEFAULT_MAX_SEATS_PER_REQUEST).is_ok());
    }

    #[test]
    fn test_zero_seats_rejected() {
        let result = validate_seats(0, DEFAULT_MAX_SEATS_PER_REQUEST);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(">= 1"));
    }

    #[test]
    fn test_negative_seats_rejected() {
        assert!(validate_seats(-3, DEFAULT_MAX_SEATS_PER_REQUEST).is_err());
    }

    #[test]
    fn test_seats_over_cap_rejected() {
        assert!(validate_seats(11, DEFAULT_MAX_SEATS_PER_REQUEST).is_err());
    }

    #[test]
    fn test_statuses_are_distinct() {
        assert_ne!(STATUS_CONFIRMED, STATUS_CANCELLED);
        assert_eq!(VALID_STATUSES.len(), 2);
    }
}
