//! Request processing shared by all routes.
//!
//! `authenticate` runs on every request and attaches verified token claims; handlers
//! then pull the caller out with the `Caller` extractor and check access through
//! `AuthGuard`.

pub mod auth;
