use std::cell::RefCell;

use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::{define_class, msg_send, DefinedClass, MainThreadOnly};
use objc2_app_kit::{NSApplication, NSApplicationDelegate, NSMenuItem};
use objc2_foundation::{MainThreadMarker, NSNotification, NSObject, NSObjectProtocol};
use tracing::{info, warn};

use crate::config::IndicatorConfig;
use crate::macos_font::BundleFonts;
use crate::statusbar::StatusBar;

pub struct AppDelegateIvars {
    config: IndicatorConfig,
    status_bar: RefCell<Option<StatusBar>>,
}

define_class!(
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    #[name = "VelocityAppDelegate"]
    #[ivars = AppDelegateIvars]
    pub struct AppDelegate;

    unsafe impl NSObjectProtocol for AppDelegate {}

    unsafe impl NSApplicationDelegate for AppDelegate {
        #[unsafe(method(applicationDidFinishLaunching:))]
        fn application_did_finish_launching(&self, _notification: &NSNotification) {
            let mtm = MainThreadMarker::from(self);

            let label = crate::font::status_label(&BundleFonts::main(), &self.ivars().config);
            let target: &AnyObject = unsafe { &*(self as *const Self as *const AnyObject) };
            let status_bar = StatusBar::new(label, target, mtm);
            *self.ivars().status_bar.borrow_mut() = Some(status_bar);

            info!("Velocity started");
        }
    }

    // --- Menu actions ---
    impl AppDelegate {
        #[unsafe(method(menuItemSelected:))]
        fn menu_item_selected(&self, sender: &NSMenuItem) {
            let mtm = MainThreadMarker::from(self);
            let tag = sender.tag();
            let app = NSApplication::sharedApplication(mtm);

            let handled = match self.ivars().status_bar.borrow().as_ref() {
                Some(status_bar) => crate::menu::dispatch(status_bar.entries(), tag, &*app),
                None => false,
            };
            if !handled {
                warn!("No menu action for tag {}", tag);
            }
        }
    }
);

impl AppDelegate {
    pub fn new(config: IndicatorConfig, mtm: MainThreadMarker) -> Retained<Self> {
        let this = mtm.alloc().set_ivars(AppDelegateIvars {
            config,
            status_bar: RefCell::new(None),
        });
        unsafe { msg_send![super(this), init] }
    }
}
