//! Shared application state handed to the request handlers.

use std::sync::Arc;

use otp_core::repositories::{IssuanceLedger, OtpStore, UserRepository};
use otp_core::services::otp::{AuthService, OtpDelivery};
use otp_core::services::stats::StatsService;
use otp_core::services::user::UserService;

/// Application state holding the core services.
///
/// Generic over the storage and delivery collaborators so the same handlers
/// serve both the production wiring and the in-memory mocks in tests.
pub struct AppState<O, L, U, D>
where
    O: OtpStore,
    L: IssuanceLedger,
    U: UserRepository,
    D: OtpDelivery,
{
    pub auth_service: Arc<AuthService<O, L, U, D>>,
    pub stats_service: Arc<StatsService<L>>,
    pub user_service: Arc<UserService<U>>,
}
