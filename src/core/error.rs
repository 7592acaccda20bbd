use thiserror::Error;

/// Failures raised by the platform-independent gallery logic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalleryError {
    #[error("unsupported transform value `{0}`")]
    UnsupportedTransform(String),
    #[error("`{function}` expects {expected} components, found {found}")]
    TransformArity {
        function: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid number `{0}` in transform")]
    InvalidNumber(String),
    #[error("speed breakpoints must be non-empty and ordered from widest to narrowest")]
    UnorderedBreakpoints,
    #[error("minimum loop item count must be at least 1")]
    ZeroLoopItems,
    #[error("malformed data URL: {0}")]
    MalformedDataUrl(&'static str),
}
