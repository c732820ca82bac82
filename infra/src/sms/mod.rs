//! OTP delivery channels

pub mod console;

pub use console::ConsoleOtpDelivery;
