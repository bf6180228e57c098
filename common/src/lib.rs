//! Common library exports shared between the backend and the server.

extern crate serde;


pub mod facet;
pub mod search_query;
pub mod properties;
pub mod geometry;
pub mod style;
pub mod layer;
