//! # Notification Module
//!
//! Fire-and-forget boundary for user-facing events.
//!
//! The encounter core only ever *emits* notifications; rendering, sound
//! playback, and the user settings that gate display all live downstream.
//! [`Notifier`] is infallible by signature, so a broken delivery path can
//! never abort encounter construction.

use serde::{Deserialize, Serialize};

/// Severity tag attached to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyLevel {
    Info,
    Success,
    Warning,
    Danger,
}

/// Sound cue a notification may request from the audio subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// No sound
    None,
    /// Generic notification chime
    Chime,
    /// Long shiny fanfare
    ShinyLong,
}

/// User setting key that governs whether a notification is shown at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifySetting {
    /// Always-on general notifications
    General,
    /// "Encountered a shiny" toggle
    EncounteredShiny,
}

/// One user-facing notification event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Display message
    pub message: String,
    /// Severity tag
    pub level: NotifyLevel,
    /// Requested sound cue
    pub sound: SoundCue,
    /// Setting key gating display downstream
    pub setting: NotifySetting,
}

impl Notification {
    /// The fixed shiny-encounter announcement.
    pub fn shiny_encounter(species: &str) -> Self {
        Self {
            message: format!("✨ You encountered a shiny {}! ✨", species),
            level: NotifyLevel::Warning,
            sound: SoundCue::ShinyLong,
            setting: NotifySetting::EncounteredShiny,
        }
    }
}

/// Notification delivery boundary. Best-effort: implementations swallow
/// their own failures.
pub trait Notifier {
    /// Delivers one notification.
    fn notify(&self, notification: Notification);
}

/// Routes notifications through the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotifyLevel::Info | NotifyLevel::Success => {
                log::info!("{}", notification.message);
            }
            NotifyLevel::Warning => log::warn!("{}", notification.message),
            NotifyLevel::Danger => log::error!("{}", notification.message),
        }
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}
