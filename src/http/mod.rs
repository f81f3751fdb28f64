//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, edge handler)
//!     → routing decision (inside vs. outside the article prefix)
//!     → upstream call (crate::upstream)
//!     → response.rs (relay with header rewrite, or branded page)
//!     → Send to client
//! ```
//!
//! headers.rs owns the hop-by-hop hygiene shared by both directions;
//! pages.rs renders the branded HTML served when relaying is impossible.

pub mod headers;
pub mod pages;
pub mod response;
pub mod server;

pub use server::EdgeServer;
