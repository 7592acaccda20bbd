use crate::core::error::GalleryError;

/// Borrowed view of a `data:` URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataUrl<'a> {
    pub media_type: &'a str,
    pub base64: bool,
    pub payload: &'a str,
}

impl DataUrl<'_> {
    #[inline]
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

pub fn parse(url: &str) -> Result<DataUrl<'_>, GalleryError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or(GalleryError::MalformedDataUrl("missing data: scheme"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or(GalleryError::MalformedDataUrl("missing payload separator"))?;
    let (media_type, base64) = match header.strip_suffix(";base64") {
        Some(mt) => (mt, true),
        None => (header, false),
    };
    Ok(DataUrl {
        media_type,
        base64,
        payload,
    })
}
