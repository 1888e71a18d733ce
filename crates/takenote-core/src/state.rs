//! Shared sync status type.

/// Outcome of the most recent sync, as shown by the shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SyncStatus {
    /// No sync has run yet
    #[default]
    Idle,
    /// A sync request is being handled
    Syncing,
    /// Last sync succeeded at the given unix ms timestamp
    Synced { at: i64 },
    /// Last sync failed
    Error(String),
}

impl SyncStatus {
    /// Short human readable label for the sidebar footer.
    pub fn label(&self) -> String {
        match self {
            Self::Idle => "Not synced yet".to_string(),
            Self::Syncing => "Syncing...".to_string(),
            Self::Synced { at } => chrono::DateTime::from_timestamp_millis(*at).map_or_else(
                || "Synced".to_string(),
                |time| format!("Synced at {}", time.format("%H:%M:%S")),
            ),
            Self::Error(message) => format!("Sync failed: {message}"),
        }
    }
}
