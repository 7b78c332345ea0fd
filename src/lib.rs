//! The Jollof Guys marketing site
//!
//! A small hyper server that renders the site's pages, serves its static
//! assets, accepts the booking form and runs every non-excluded request
//! through the header interceptor.

pub mod booking;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod interceptor;
pub mod logger;
pub mod logo;
pub mod pages;
pub mod routing;
pub mod server;

pub use error::{Result, SiteError};
