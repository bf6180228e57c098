//! Meteorite feed search: query building, feed loading, styling and the
//! per-facet layer controller.

pub mod api;
pub mod config;
pub mod error;
pub mod feed_utils;
pub mod render;
pub mod server_extra;
