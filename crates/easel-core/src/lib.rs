//! Easel core library — UI-agnostic logic for the image kiosk.
//!
//! `easel-core` provides the repository index and cursor-based pagination
//! engine behind the kiosk's gallery, plus the boundary contracts for the
//! collaborators the kiosk composes around it. It is intentionally
//! decoupled from any UI framework so that a touch frontend can schedule
//! its blocking work and consume its results without the core knowing
//! about widgets or gestures.
//!
//! # Modules
//!
//! - [`repo`] — The repository manager: [`PromptEntry`] scanning, the
//!   newest-first [`OrderingIndex`], the [`NextToken`] cursor codec, the
//!   [`RepoManager`] pagination engine, and [`PageBookmarks`].
//! - [`task`] — Off-thread page fetching over an mpsc channel.
//! - [`provider`] — The [`ImageProvider`] boundary for generation services.
//! - [`network`] — The [`NetworkTool`] boundary for WiFi management.
//! - [`config`] — TOML configuration ([`Config`]).
//! - [`error`] — Unified error type ([`CoreError`]) and result alias
//!   ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod network;
pub mod provider;
pub mod repo;
pub mod task;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use network::{NetworkDescriptor, NetworkEvent, NetworkTool};
pub use provider::{ImageProvider, ProviderResult};
pub use repo::{
    scan_repository, Direction, NextToken, OrderingIndex, PageBookmarks, PageResult,
    PromptEntry, RepoManager, TokenError,
};
pub use task::{spawn_page_fetch, FetchMessage};
