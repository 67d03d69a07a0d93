//! Cafe & Wifi - Directory of work-friendly cafes.
//!
//! This crate lists cafes with their amenities (sockets, wifi, toilets,
//! call-friendliness) and accepts new entries through a validated form,
//! rendered entirely server-side over a SQLite store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod context;
pub mod domain;
pub mod ports;
