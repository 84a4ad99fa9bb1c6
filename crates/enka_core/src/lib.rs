//! Data model, validation, and query layer for Enka Network player
//! showcase payloads.
//!
//! Everything in this crate is pure and synchronous. Fetching lives in the
//! client crate, rendering in the render crate; this one turns a raw response
//! document into a typed [`core_api::PlayerProfile`] and answers questions
//! about it.

pub mod core_api;
pub mod stat;
