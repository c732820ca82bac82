//! User query service

pub mod service;

pub use service::UserService;
