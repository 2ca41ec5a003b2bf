use tracing::info;

/// The part of the application lifecycle the menu can drive.
pub trait Lifecycle {
    fn request_termination(&self);
}

/// A fixed menu row. The menu item's tag is its index in the table, which is
/// how a click finds its way back to `action`.
pub struct MenuEntry<L> {
    pub title: &'static str,
    pub key_equivalent: &'static str,
    pub action: fn(&L),
}

pub fn menu_entries<L: Lifecycle>() -> [MenuEntry<L>; 2] {
    [
        MenuEntry {
            title: "Settings",
            key_equivalent: ",",
            action: settings_clicked::<L>,
        },
        MenuEntry {
            title: "Quit",
            key_equivalent: "q",
            action: quit_clicked::<L>,
        },
    ]
}

// Placeholder until there is a settings window.
fn settings_clicked<L>(_lifecycle: &L) {
    info!("Settings clicked");
}

fn quit_clicked<L: Lifecycle>(lifecycle: &L) {
    info!("Quit clicked");
    lifecycle.request_termination();
}

/// Run the action for the entry at `tag`. Returns false for unknown tags.
pub fn dispatch<L>(entries: &[MenuEntry<L>], tag: isize, lifecycle: &L) -> bool {
    let Some(entry) = usize::try_from(tag).ok().and_then(|i| entries.get(i)) else {
        return false;
    };
    (entry.action)(lifecycle);
    true
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use tracing_test::traced_test;

    use super::*;

    #[derive(Default)]
    struct CountingLifecycle {
        terminations: Cell<u32>,
    }

    impl Lifecycle for CountingLifecycle {
        fn request_termination(&self) {
            self.terminations.set(self.terminations.get() + 1);
        }
    }

    #[test]
    fn menu_has_settings_then_quit() {
        let entries = menu_entries::<CountingLifecycle>();
        let rows: Vec<_> = entries
            .iter()
            .map(|e| (e.title, e.key_equivalent))
            .collect();
        assert_eq!(rows, vec![("Settings", ","), ("Quit", "q")]);
    }

    #[test]
    fn quit_requests_termination_once() {
        let lifecycle = CountingLifecycle::default();
        let entries = menu_entries::<CountingLifecycle>();

        assert!(dispatch(&entries, 1, &lifecycle));
        assert_eq!(lifecycle.terminations.get(), 1);
    }

    #[test]
    #[traced_test]
    fn settings_only_logs() {
        let lifecycle = CountingLifecycle::default();
        let entries = menu_entries::<CountingLifecycle>();

        assert!(dispatch(&entries, 0, &lifecycle));
        assert_eq!(lifecycle.terminations.get(), 0);
        assert!(logs_contain("Settings clicked"));
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let lifecycle = CountingLifecycle::default();
        let entries = menu_entries::<CountingLifecycle>();

        assert!(!dispatch(&entries, 2, &lifecycle));
        assert!(!dispatch(&entries, -1, &lifecycle));
        assert_eq!(lifecycle.terminations.get(), 0);
    }
}
