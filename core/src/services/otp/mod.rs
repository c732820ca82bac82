//! OTP engine: issuance, verification and the delivery seam

pub mod config;
pub mod delivery;
pub mod generator;
pub mod service;

pub use config::OtpServiceConfig;
pub use delivery::OtpDelivery;
pub use generator::generate_code;
pub use service::AuthService;
