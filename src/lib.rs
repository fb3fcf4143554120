//! ShiftBuddy - Relocation marketplace core
//!
//! This crate implements the booking lifecycle between finders and local
//! buddies, with milestone tracking, and the locality search and buddy
//! recommendation engine that helps finders pick a buddy.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
