pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod localizer;
pub mod palette;
pub mod record;
pub mod scorer;
pub mod session;
// cmd and reports are binary modules, declared in main.rs.
