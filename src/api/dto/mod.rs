//! Data transfer objects for the HTTP surface.

pub mod requests;
pub mod responses;
pub mod transformers;
