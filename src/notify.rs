// src/notify.rs
use notify_rust::{Notification, Timeout};

use crate::config::consts::{NOTIFY_BODY, NOTIFY_TIMEOUT_SECS, NOTIFY_TITLE};

/// Desktop notification capability. One call per suspicious player.
pub trait Notify {
    fn suspicious_player(&self);
}

/// Fire-and-forget desktop notification with a fixed title, body and
/// timeout. A delivery failure is printed and otherwise ignored.
pub struct DesktopNotifier;

impl Notify for DesktopNotifier {
    fn suspicious_player(&self) {
        let result = Notification::new()
            .summary(NOTIFY_TITLE)
            .body(NOTIFY_BODY)
            .timeout(Timeout::Milliseconds(NOTIFY_TIMEOUT_SECS * 1000))
            .show();
        if let Err(e) = result {
            eprintln!("Notification could not be delivered: {e}");
        }
    }
}

/// A no-op notifier for `--no-notify` and tests.
pub struct NullNotifier;
impl Notify for NullNotifier {
    fn suspicious_player(&self) {}
}
