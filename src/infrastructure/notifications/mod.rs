//! # Notifications
//!
//! Operator notification port and SMTP implementation.
//!
//! Notification is a best-effort side channel: the submission pipeline
//! logs failures and carries on, and skips dispatch entirely when no
//! channel is configured.

pub mod error;
pub mod smtp;
pub mod traits;

pub use error::{NotificationError, NotificationResult};
pub use smtp::SmtpNotifier;
pub use traits::{Notifier, SubmissionNotice};
