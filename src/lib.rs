//! # DonSTU Timetable Bot
//!
//! A Telegram bot that serves class schedules for DGTU and PI DGTU through chat.
//!
//! ## Features
//! - Multi-step login dialogue against the university timetable API
//! - Student and teacher schedules for today, tomorrow, or the whole week
//! - Pluggable session storage (in-memory or SQLite)
//! - Health check endpoint for deployments

/// Upstream timetable API client and wire types
pub mod api;
/// Bot handlers, login flow, schedule formatting, and menus
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Operational services like the health endpoint
pub mod services;
/// Session store backends
pub mod storage;
/// Utility functions for dates and validation
pub mod utils;
