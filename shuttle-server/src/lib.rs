//! Office shuttle advisor.
//!
//! A service that answers: "when is the next shuttle between the office
//! and the metro station?"

pub mod advisor;
pub mod config;
pub mod domain;
pub mod schedule;
pub mod web;
