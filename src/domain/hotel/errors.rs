//! Hotel listing error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | Code | HTTP Status |
//! |-------|------|-------------|
//! | EnrollmentNotFound | NOT_FOUND | 404 |
//! | TicketNotFound | NOT_FOUND | 404 |
//! | HotelNotFound | NOT_FOUND | 404 |
//! | PaymentRequired | PAYMENT_REQUIRED | 402 |
//! | InvalidHotelId | INVALID_HOTEL_ID | 400 |
//! | Infrastructure | INTERNAL_ERROR | 500 |

use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, HotelId, UserId};

use super::IneligibilityReason;

/// Errors produced by the eligibility check and the listing queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelError {
    /// The user has not enrolled yet.
    EnrollmentNotFound(UserId),

    /// The enrollment has no ticket.
    TicketNotFound(EnrollmentId),

    /// No hotel with this id.
    HotelNotFound(HotelId),

    /// The ticket does not entitle the user to hotel access.
    PaymentRequired(IneligibilityReason),

    /// The requested hotel id is not a positive integer.
    InvalidHotelId(String),

    /// The record store failed.
    Infrastructure(String),
}

impl HotelError {
    pub fn enrollment_not_found(user_id: UserId) -> Self {
        HotelError::EnrollmentNotFound(user_id)
    }

    pub fn ticket_not_found(enrollment_id: EnrollmentId) -> Self {
        HotelError::TicketNotFound(enrollment_id)
    }

    pub fn hotel_not_found(hotel_id: HotelId) -> Self {
        HotelError::HotelNotFound(hotel_id)
    }

    pub fn payment_required(reason: IneligibilityReason) -> Self {
        HotelError::PaymentRequired(reason)
    }

    pub fn invalid_hotel_id(raw: impl Into<String>) -> Self {
        HotelError::InvalidHotelId(raw.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        HotelError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    ///
    /// The three lookup failures share `NotFound`.
    pub fn code(&self) -> ErrorCode {
        match self {
            HotelError::EnrollmentNotFound(_)
            | HotelError::TicketNotFound(_)
            | HotelError::HotelNotFound(_) => ErrorCode::NotFound,
            HotelError::PaymentRequired(_) => ErrorCode::PaymentRequired,
            HotelError::InvalidHotelId(_) => ErrorCode::InvalidHotelId,
            HotelError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Returns a user-facing error message.
    ///
    /// Infrastructure details stay out of the message; callers log them.
    pub fn message(&self) -> String {
        match self {
            HotelError::EnrollmentNotFound(_) => "No enrollment found for this user".to_string(),
            HotelError::TicketNotFound(_) => "No ticket found for this enrollment".to_string(),
            HotelError::HotelNotFound(id) => format!("Hotel {} not found", id),
            HotelError::PaymentRequired(reason) => {
                format!("Ticket does not grant hotel access: {}", reason)
            }
            HotelError::InvalidHotelId(raw) => format!("Invalid hotel id: '{}'", raw),
            HotelError::Infrastructure(_) => "Internal server error".to_string(),
        }
    }
}

impl std::fmt::Display for HotelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotelError::Infrastructure(detail) => write!(f, "Infrastructure error: {}", detail),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl std::error::Error for HotelError {}

impl From<DomainError> for HotelError {
    fn from(err: DomainError) -> Self {
        HotelError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_id() -> UserId {
        UserId::new(1).unwrap()
    }

    #[test]
    fn not_found_variants_share_code() {
        assert_eq!(
            HotelError::enrollment_not_found(user_id()).code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            HotelError::ticket_not_found(EnrollmentId::new(2).unwrap()).code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            HotelError::hotel_not_found(HotelId::new(3).unwrap()).code(),
            ErrorCode::NotFound
        );
    }

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            HotelError::payment_required(IneligibilityReason::HotelNotIncluded).code(),
            ErrorCode::PaymentRequired
        );
        assert_eq!(
            HotelError::invalid_hotel_id("abc").code(),
            ErrorCode::InvalidHotelId
        );
        assert_eq!(
            HotelError::infrastructure("x").code(),
            ErrorCode::InternalError
        );
    }

    #[test]
    fn payment_required_message_includes_reason() {
        let err = HotelError::payment_required(IneligibilityReason::RemoteEvent);
        assert_eq!(err.message(), "Ticket does not grant hotel access: event is remote");
    }

    #[test]
    fn infrastructure_message_hides_detail() {
        let err = HotelError::infrastructure("connection reset by peer");
        assert_eq!(err.message(), "Internal server error");
        assert!(err.to_string().contains("connection reset by peer"));
    }

    #[test]
    fn domain_error_converts_to_infrastructure() {
        let err: HotelError = DomainError::database("pool timed out").into();
        assert!(matches!(err, HotelError::Infrastructure(ref m) if m.contains("pool timed out")));
    }
}
