//! Network configuration tool boundary.
//!
//! The kiosk manages WiFi through an external network-manager tool; the
//! implementation wrapping that tool lives outside the core. Each operation
//! reports through events on an mpsc channel rather than a direct return,
//! and each is independently failable without affecting repository browsing.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

/// One WiFi network as reported by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescriptor {
    pub ssid: String,
    pub bssid: String,
    pub mode: String,
    pub channel: String,
    pub rate: String,
    pub signal: String,
    pub bars: String,
}

/// Events emitted by network tool operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    /// A scan finished; may be empty when no networks are in range.
    NetworksFound(Vec<NetworkDescriptor>),
    /// Outcome of a connect attempt or a current-connection query.
    ConnectionStatus { message: String, success: bool },
    /// An operation failed outright (tool missing, timeout, ...).
    Error(String),
}

/// Asynchronous WiFi management operations.
///
/// Every operation resolves by sending one or more [`NetworkEvent`]s on
/// `events`; implementations never panic past this boundary. A dropped
/// receiver aborts reporting harmlessly.
#[async_trait]
pub trait NetworkTool: Send + Sync {
    /// Scans for available networks, reporting [`NetworkEvent::NetworksFound`]
    /// or [`NetworkEvent::Error`].
    async fn scan(&self, events: UnboundedSender<NetworkEvent>);

    /// Connects to `ssid`, optionally with a password, reporting
    /// [`NetworkEvent::ConnectionStatus`].
    async fn connect(
        &self,
        ssid: &str,
        password: Option<&str>,
        events: UnboundedSender<NetworkEvent>,
    );

    /// Queries the currently connected network, reporting
    /// [`NetworkEvent::ConnectionStatus`].
    async fn current(&self, events: UnboundedSender<NetworkEvent>);
}
