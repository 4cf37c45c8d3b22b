//! HTTP handlers (DTO boundary).

pub mod jokes;
