//! Core modules for labsite's navigation layer and shared primitives.

pub mod assets;
pub mod config;
pub mod cv;
pub mod error;
pub mod navigator;
pub mod output;
pub mod routes;
pub mod tui;
pub mod validate;
pub mod view;
