//! # Estate Dashboard Library
//!
//! Core functionality for the estate-dashboard service: mock portfolio
//! generation, per-view aggregation, and the HTTP surface that serves the
//! derived rows to a rendering layer.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mock;
pub mod models;
pub mod server;
pub mod telemetry;
pub mod views;
