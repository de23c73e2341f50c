//! Yellow Card: typed client for the Yellow Card payments API
//!
//! A library for signing, sending and decoding requests to the Yellow Card
//! business API (payment channels, networks, rates, bank account lookup and
//! the payment lifecycle), plus the configuration layer used by the
//! `yellowcard` command-line tool.

pub mod api;
pub mod config;
pub mod model;
pub mod time;
pub mod transport;
