//! Request handler module
//!
//! Routing dispatch, static asset serving and booking form submission.

mod contact;
pub mod router;
pub mod static_files;

pub use router::handle_request;
