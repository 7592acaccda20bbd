use crate::core::error::GalleryError;
use glam::DMat4;

// Parsing of computed `transform` values.
//
// Browsers serialize a resolved transform as `none`, `matrix(a, b, c, d, e, f)`
// or `matrix3d(<16 numbers>)` in column-major order, so those are the only
// forms accepted here.

/// Parse a computed-style transform into a 4x4 matrix.
pub fn parse_computed_transform(value: &str) -> Result<DMat4, GalleryError> {
    let value = value.trim();
    if value.is_empty() || value == "none" {
        return Ok(DMat4::IDENTITY);
    }
    if let Some(args) = function_args(value, "matrix3d") {
        let v = parse_numbers(args, "matrix3d", 16)?;
        let mut cols = [0.0_f64; 16];
        cols.copy_from_slice(&v);
        return Ok(DMat4::from_cols_array(&cols));
    }
    if let Some(args) = function_args(value, "matrix") {
        let v = parse_numbers(args, "matrix", 6)?;
        let (a, b, c, d, e, f) = (v[0], v[1], v[2], v[3], v[4], v[5]);
        return Ok(DMat4::from_cols_array(&[
            a, b, 0.0, 0.0, //
            c, d, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            e, f, 0.0, 1.0,
        ]));
    }
    Err(GalleryError::UnsupportedTransform(value.to_string()))
}

/// Horizontal translation component (`m41` in DOMMatrix terms).
#[inline]
pub fn translation_x(m: &DMat4) -> f64 {
    m.w_axis.x
}

/// Inline style value for a pure horizontal translation.
#[inline]
pub fn translate3d_css(x: f64) -> String {
    format!("translate3d({}px, 0, 0)", x)
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let rest = value.strip_prefix(name)?.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_numbers(
    args: &str,
    function: &'static str,
    expected: usize,
) -> Result<Vec<f64>, GalleryError> {
    let values = args
        .split(',')
        .map(str::trim)
        .map(|s| {
            s.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| GalleryError::InvalidNumber(s.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != expected {
        return Err(GalleryError::TransformArity {
            function,
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}
