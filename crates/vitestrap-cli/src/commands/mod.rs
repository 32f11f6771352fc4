//! Command handlers.
//!
//! vitestrap has a single command; it lives in [`create`].

pub mod create;
