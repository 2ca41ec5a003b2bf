use thiserror::Error;

/// Ways the bundled font can fail to become usable. Every variant is
/// recoverable: the indicator falls back to a plain label.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FontLoadError {
    #[error("font file '{name}.{extension}' not found in the app bundle")]
    ResourceNotFound { name: String, extension: String },

    #[error("could not create data provider for font")]
    UnreadableData,

    #[error("could not create font program from data provider")]
    UnparseableProgram,

    #[error("could not register font: {0}")]
    RegistrationRejected(String),

    #[error("no font named '{postscript_name}' available at {size}pt")]
    FontConstructionFailed { postscript_name: String, size: f64 },
}
