//! Status announcements
//!
//! Rendering of announcement events into channel messages, and the
//! single-slot publisher that keeps exactly one "current status"
//! message alive in the target channel.

mod publisher;
mod render;

pub use publisher::StatusPublisher;
pub use render::{Announcement, AnnouncementKind};
