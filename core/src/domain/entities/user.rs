//! User entity representing a verified phone-number identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user identified by a unique phone number.
///
/// Created lazily on the first successful OTP verification for a phone and
/// never updated or deleted by this subsystem afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database-assigned identifier
    pub id: i64,

    /// Phone number in normalized `+`-prefixed form, unique per user
    pub phone_number: String,

    /// Timestamp when the user was created (UTC)
    pub created_at: DateTime<Utc>,
}
