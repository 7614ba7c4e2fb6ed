//! Enrollment reader port.
//!
//! Read-only access to enrollments. The eligibility check starts here:
//! without an enrollment there is no ticket to inspect.

use async_trait::async_trait;

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{DomainError, UserId};

/// Reader port for enrollments.
#[async_trait]
pub trait EnrollmentReader: Send + Sync {
    /// Find the user's enrollment, joined with its address.
    ///
    /// Returns `None` if the user has not enrolled.
    async fn find_with_address_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Enrollment>, DomainError>;
}
