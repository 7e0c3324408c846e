//! Mail adapters
//!
//! `SmtpNotifier` delivers over SMTP; `LogNotifier` stands in when no SMTP
//! credentials are configured.

pub mod log;
pub mod smtp;

pub use log::LogNotifier;
pub use smtp::SmtpNotifier;
