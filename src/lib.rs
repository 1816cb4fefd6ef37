//! # Course Link Bot
//!
//! A Telegram bot that answers `/c` with a link to the first chapter of the
//! student's active course package.
//!
//! ## Flow
//! - Find the chat's `Active`/`Notyet` student channels
//! - Refresh each channel's package reference from its subject
//! - Load package, course and chapter graphs in batched queries
//! - Pick the entry course (`order == 1`) and chapter (`position == 1`)
//! - Reply with one link button per qualifying channel, or a denial

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, graph loading, and migrations
pub mod database;
/// Package synchronization, eligibility, replies, and health
pub mod services;
/// Logging and message delivery helpers
pub mod utils;
