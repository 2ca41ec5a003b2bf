use std::path::PathBuf;
use std::ptr::{self, NonNull};

use objc2::rc::Retained;
use objc2_app_kit::NSFont;
use objc2_core_foundation::{CFError, CFRetained, CFURL};
use objc2_core_graphics::{CGDataProvider, CGFont};
use objc2_core_text::CTFontManagerRegisterGraphicsFont;
use objc2_foundation::{NSBundle, NSString};

use crate::font::FontSystem;

/// Fonts shipped in the main bundle's Resources directory, registered with
/// CoreText for this process only.
pub struct BundleFonts {
    bundle: Retained<NSBundle>,
}

impl BundleFonts {
    pub fn main() -> Self {
        BundleFonts {
            bundle: NSBundle::mainBundle(),
        }
    }
}

impl FontSystem for BundleFonts {
    type Location = PathBuf;
    type Provider = CFRetained<CGDataProvider>;
    type Program = CFRetained<CGFont>;
    type Font = Retained<NSFont>;

    fn locate(&self, name: &str, extension: &str) -> Option<PathBuf> {
        let path = self.bundle.pathForResource_ofType(
            Some(&NSString::from_str(name)),
            Some(&NSString::from_str(extension)),
        )?;
        Some(PathBuf::from(path.to_string()))
    }

    fn open_provider(&self, location: &PathBuf) -> Option<CFRetained<CGDataProvider>> {
        let url = CFURL::from_file_path(location)?;
        CGDataProvider::with_url(Some(&url))
    }

    fn parse_program(&self, provider: &CFRetained<CGDataProvider>) -> Option<CFRetained<CGFont>> {
        CGFont::with_data_provider(provider)
    }

    fn register(&self, program: &CFRetained<CGFont>) -> Result<(), String> {
        let mut error: *mut CFError = ptr::null_mut();
        let registered = unsafe { CTFontManagerRegisterGraphicsFont(program, &mut error) };
        if registered {
            return Ok(());
        }
        match NonNull::new(error) {
            // The out-parameter follows the create rule.
            Some(error) => {
                let error = unsafe { CFRetained::from_raw(error) };
                Err(format!("{:?}", error))
            }
            None => Err("unknown error".to_string()),
        }
    }

    fn postscript_name(&self, program: &CFRetained<CGFont>) -> Option<String> {
        CGFont::post_script_name(Some(program)).map(|name| name.to_string())
    }

    fn make_font(&self, postscript_name: &str, size: f64) -> Option<Retained<NSFont>> {
        NSFont::fontWithName_size(&NSString::from_str(postscript_name), size)
    }
}
