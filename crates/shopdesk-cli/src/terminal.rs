//! Terminal adapters for the form's notification and navigation ports.

use shopdesk_form::{Navigator, NotificationKind, Notifier};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => println!("✔ {message}"),
            NotificationKind::Error => eprintln!("✖ {message}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        println!("→ {path}");
    }
}
