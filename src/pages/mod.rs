//! Page modules, one per registered route.
//!
//! Each page owns its content record types, a `load` that parses its
//! embedded JSON file, a `view` that builds the rendered page, and a
//! `schema()` describing its record shapes for discovery.

pub mod achievements;
pub mod contact;
pub mod facilities;
pub mod gallery;
pub mod home;
pub mod members;
pub mod news;
pub mod projects;
pub mod research;
pub mod software;
pub mod text;
