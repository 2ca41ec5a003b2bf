use tracing::{info, warn};

use crate::config::{Alignment, IndicatorConfig};
use crate::error::FontLoadError;

/// One method per step of getting a bundled font file registered and usable.
/// The platform implementation lives in `macos_font`.
pub trait FontSystem {
    type Location;
    type Provider;
    type Program;
    type Font;

    /// Find `name.extension` among the bundled resources.
    fn locate(&self, name: &str, extension: &str) -> Option<Self::Location>;

    fn open_provider(&self, location: &Self::Location) -> Option<Self::Provider>;

    fn parse_program(&self, provider: &Self::Provider) -> Option<Self::Program>;

    /// Make the program available by name to the whole process. The error
    /// string is the system's own rejection reason.
    fn register(&self, program: &Self::Program) -> Result<(), String>;

    fn postscript_name(&self, program: &Self::Program) -> Option<String>;

    fn make_font(&self, postscript_name: &str, size: f64) -> Option<Self::Font>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFont<F> {
    pub font: F,
    pub postscript_name: String,
    pub size: f64,
}

/// Register the bundled font `name.extension` and open it at `size`.
/// The first failing step ends the attempt; there is no retry.
pub fn load_font<S: FontSystem>(
    system: &S,
    name: &str,
    extension: &str,
    size: f64,
) -> Result<LoadedFont<S::Font>, FontLoadError> {
    info!("Attempting to load font: {}.{}", name, extension);

    let location = system
        .locate(name, extension)
        .ok_or_else(|| FontLoadError::ResourceNotFound {
            name: name.to_string(),
            extension: extension.to_string(),
        })?;
    info!("Font file found");

    let provider = system
        .open_provider(&location)
        .ok_or(FontLoadError::UnreadableData)?;
    info!("Data provider created");

    let program = system
        .parse_program(&provider)
        .ok_or(FontLoadError::UnparseableProgram)?;
    info!("Font program created");

    system.register(&program).map_err(|reason| {
        warn!("Font registration rejected: {}", reason);
        FontLoadError::RegistrationRejected(reason)
    })?;
    info!("Font registered successfully");

    // The PostScript name need not match the file name.
    let postscript_name = system
        .postscript_name(&program)
        .unwrap_or_else(|| name.to_string());
    info!("Creating font with PostScript name: {}", postscript_name);

    let font = system.make_font(&postscript_name, size).ok_or_else(|| {
        FontLoadError::FontConstructionFailed {
            postscript_name: postscript_name.clone(),
            size,
        }
    })?;

    Ok(LoadedFont {
        font,
        postscript_name,
        size,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledGlyph<F> {
    pub text: &'static str,
    pub font: F,
    pub alignment: Alignment,
    pub baseline_offset: f64,
}

/// What the status bar button shows. Exactly one of the two, always.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLabel<F> {
    Styled(StyledGlyph<F>),
    Plain(&'static str),
}

impl<F> StatusLabel<F> {
    pub fn text(&self) -> &'static str {
        match self {
            StatusLabel::Styled(styled) => styled.text,
            StatusLabel::Plain(text) => text,
        }
    }
}

/// Load the configured font and pick the label. A failed load is logged and
/// turned into the plain fallback; it never propagates.
pub fn status_label<S: FontSystem>(system: &S, config: &IndicatorConfig) -> StatusLabel<S::Font> {
    match load_font(
        system,
        config.font_name,
        config.font_extension,
        config.point_size,
    ) {
        Ok(loaded) => StatusLabel::Styled(StyledGlyph {
            text: config.glyph,
            font: loaded.font,
            alignment: config.alignment,
            baseline_offset: config.baseline_offset,
        }),
        Err(e) => {
            warn!("Falling back to plain label: {}", e);
            StatusLabel::Plain(config.fallback_glyph)
        }
    }
}
