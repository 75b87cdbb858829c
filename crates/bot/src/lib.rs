//! # TTD Bot
//!
//! Discord front end for the `%%` reference resolver.
//!
//! ## Architecture
//!
//! ```text
//! startup
//!     ├──> config   bot token: flag/env → config.json → interactive prompt
//!     ├──> dataset  symbol.json → ReferenceDataset (fatal on error)
//!     └──> discord  serenity client, one task per gateway event
//!
//! per message
//!     Dispatcher::handle_message
//!         ├──> ttd_resolver::process_message (pure)
//!         └──> ReplySink::send_reply (one embed, same channel)
//! ```

pub mod config;
pub mod discord;
pub mod dispatch;
pub mod sandbox;

pub use config::{BotConfig, ConfigError};
pub use dispatch::{Dispatch, Dispatcher, ReplySink};
