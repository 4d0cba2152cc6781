//! Tests for announcement rendering

use super::*;

#[test]
fn fixed_templates_match_expected_copy() {
    assert_eq!(
        Announcement::back_online().text,
        "✅ **SERVER BACK ONLINE**\nThe server has recovered and is now accessible!"
    );
    assert_eq!(
        Announcement::offline().text,
        "⚠️ **SERVER OFFLINE**\nThe server is not responding. This may be an automatic restart or unexpected downtime."
    );
    assert_eq!(
        Announcement::maintenance_start().text,
        "🛠️ **SERVER MAINTENANCE**\nThe server is now undergoing maintenance."
    );
    assert_eq!(
        Announcement::maintenance_end().text,
        "✅ **MAINTENANCE COMPLETE**\nThe server is back online!"
    );
}

#[test]
fn restart_interpolates_eta() {
    let announcement = Announcement::restart("10 minutes");
    assert_eq!(announcement.kind, AnnouncementKind::Restart);
    assert_eq!(
        announcement.text,
        "🔄 **SERVER RESTART**\nThe server will restart in 10 minutes."
    );
}

#[test]
fn manual_status_carries_free_text() {
    let announcement = Announcement::manual_status("Patch 1.2 deployed");
    assert_eq!(announcement.kind, AnnouncementKind::ManualStatus);
    assert_eq!(
        announcement.text,
        "ℹ️ **SERVER STATUS**\nPatch 1.2 deployed"
    );
}

#[test]
fn kinds_are_tagged_correctly() {
    assert_eq!(Announcement::back_online().kind, AnnouncementKind::BackOnline);
    assert_eq!(Announcement::offline().kind, AnnouncementKind::Offline);
    assert_eq!(
        Announcement::maintenance_start().kind,
        AnnouncementKind::MaintenanceStart
    );
    assert_eq!(
        Announcement::maintenance_end().kind,
        AnnouncementKind::MaintenanceEnd
    );
}
