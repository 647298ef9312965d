//! Shared test helpers.

#![allow(dead_code)]

pub mod model_fixtures;
