//! Pure rendering of announcement events into message text

/// Kind of status announcement shown in the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementKind {
    BackOnline,
    Offline,
    MaintenanceStart,
    MaintenanceEnd,
    Restart,
    ManualStatus,
}

/// A rendered announcement: a kind tag plus the final message text.
///
/// Transient; produced by the transition engine and handed straight to
/// the publisher, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub kind: AnnouncementKind,
    pub text: String,
}

impl Announcement {
    pub fn back_online() -> Self {
        Self {
            kind: AnnouncementKind::BackOnline,
            text: "✅ **SERVER BACK ONLINE**\nThe server has recovered and is now accessible!"
                .to_string(),
        }
    }

    pub fn offline() -> Self {
        Self {
            kind: AnnouncementKind::Offline,
            text: "⚠️ **SERVER OFFLINE**\nThe server is not responding. This may be an automatic restart or unexpected downtime."
                .to_string(),
        }
    }

    pub fn maintenance_start() -> Self {
        Self {
            kind: AnnouncementKind::MaintenanceStart,
            text: "🛠️ **SERVER MAINTENANCE**\nThe server is now undergoing maintenance."
                .to_string(),
        }
    }

    pub fn maintenance_end() -> Self {
        Self {
            kind: AnnouncementKind::MaintenanceEnd,
            text: "✅ **MAINTENANCE COMPLETE**\nThe server is back online!".to_string(),
        }
    }

    pub fn restart(eta: &str) -> Self {
        Self {
            kind: AnnouncementKind::Restart,
            text: format!("🔄 **SERVER RESTART**\nThe server will restart in {}.", eta),
        }
    }

    pub fn manual_status(text: &str) -> Self {
        Self {
            kind: AnnouncementKind::ManualStatus,
            text: format!("ℹ️ **SERVER STATUS**\n{}", text),
        }
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
