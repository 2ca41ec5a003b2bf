use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::{sel, AnyThread};
use objc2_app_kit::{
    NSApplication, NSFont, NSMenu, NSMenuItem, NSMutableParagraphStyle, NSSquareStatusItemLength,
    NSStatusBar, NSStatusItem, NSTextAlignment,
};
use objc2_foundation::{
    ns_string, MainThreadMarker, NSMutableAttributedString, NSNumber, NSRange, NSString,
};
use tracing::info;

use crate::config::{Alignment, IndicatorConfig};
use crate::font::{StatusLabel, StyledGlyph};
use crate::menu::{self, Lifecycle, MenuEntry};

impl Lifecycle for NSApplication {
    fn request_termination(&self) {
        #[allow(unused_unsafe)]
        unsafe {
            self.terminate(None)
        };
    }
}

pub struct StatusBar {
    _status_item: Retained<NSStatusItem>,
    entries: [MenuEntry<NSApplication>; 2],
}

impl StatusBar {
    /// Menu clicks are sent to `target` as `menuItemSelected:` with the
    /// entry index as the item's tag.
    pub fn new(
        label: StatusLabel<Retained<NSFont>>,
        target: &AnyObject,
        mtm: MainThreadMarker,
    ) -> Self {
        let status_bar = NSStatusBar::systemStatusBar();
        let status_item = status_bar.statusItemWithLength(NSSquareStatusItemLength);

        if let Some(button) = status_item.button(mtm) {
            match &label {
                StatusLabel::Styled(styled) => {
                    let title = attributed_title(styled);
                    button.setAttributedTitle(&title);
                }
                StatusLabel::Plain(text) => button.setTitle(&NSString::from_str(text)),
            }
        }
        info!("Status item created with label '{}'", label.text());

        let entries = menu::menu_entries::<NSApplication>();
        let menu = NSMenu::new(mtm);
        for (tag, entry) in entries.iter().enumerate() {
            let item = unsafe {
                NSMenuItem::initWithTitle_action_keyEquivalent(
                    mtm.alloc(),
                    &NSString::from_str(entry.title),
                    Some(sel!(menuItemSelected:)),
                    &NSString::from_str(entry.key_equivalent),
                )
            };
            item.setTag(tag as isize);
            unsafe { item.setTarget(Some(target)) };
            menu.addItem(&item);
        }
        status_item.setMenu(Some(&menu));

        StatusBar {
            _status_item: status_item,
            entries,
        }
    }

    pub fn entries(&self) -> &[MenuEntry<NSApplication>] {
        &self.entries
    }
}

fn attributed_title(styled: &StyledGlyph<Retained<NSFont>>) -> Retained<NSMutableAttributedString> {
    let text = NSString::from_str(styled.text);
    let title = unsafe {
        NSMutableAttributedString::initWithString(NSMutableAttributedString::alloc(), &text)
    };
    let range = NSRange::new(0, text.len());

    let paragraph = NSMutableParagraphStyle::new();
    paragraph.setAlignment(match styled.alignment {
        Alignment::Left => NSTextAlignment::Left,
        Alignment::Center => NSTextAlignment::Center,
        Alignment::Right => NSTextAlignment::Right,
    });
    let offset = NSNumber::new_f64(styled.baseline_offset);

    unsafe {
        title.addAttribute_value_range(ns_string!("NSFont"), &styled.font, range);
        title.addAttribute_value_range(ns_string!("NSParagraphStyle"), &paragraph, range);
        title.addAttribute_value_range(ns_string!("NSBaselineOffset"), &offset, range);
    }
    title
}
