// Page structure and motion tuning for the scroll gallery.
// Shared by the web glue and the pure `core` modules; host tests include it directly.

// Page structure
pub const BUILDER_CLASS: &str = "is-builder"; // set on <html> while the page is being edited
pub const GALLERY_SELECTOR: &str = ".gallery-wrapper";
pub const STRIP_SELECTORS: [&str; 3] = [
    ".grid-container-1",
    ".grid-container-2",
    ".grid-container-3",
];
pub const ITEM_SELECTOR: &str = ".grid-item";
pub const ITEM_IMAGE_SELECTOR: &str = "img";
pub const HIDDEN_CLASS: &str = "hidden";
pub const MOVING_LEFT_CLASS: &str = "moving-left";
pub const MOVING_RIGHT_CLASS: &str = "moving-right";

// Strips shorter than this get their items duplicated once so the loop has no gap
pub const MIN_LOOP_ITEMS: usize = 8;

// Pre-roll baselines for long strips (px)
pub const PREROLL_WIDE_PX: f64 = -2000.0;
pub const PREROLL_NARROW_PX: f64 = -900.0;
pub const PREROLL_CENTER_NARROW_PX: f64 = 0.0; // second strip on narrow viewports
pub const NARROW_VIEWPORT_PX: f64 = 1200.0; // below this width the narrow pre-roll applies

// Scroll-to-translation ratio for strips flagged moving-left / moving-right
pub const DIRECTIONAL_SPEED: f64 = 0.9;

// Neutral strips: (minimum viewport width px, ratio), widest first
pub const NEUTRAL_SPEED_TABLE: [(f64, f64); 5] = [
    (2560.0, 0.9),
    (1440.0, 0.55),
    (1024.0, 0.45),
    (768.0, 0.35),
    (320.0, 0.25),
];

// File preview
pub const PREVIEW_IMAGE_ID: &str = "preview-image";
pub const PREVIEW_VISIBLE_DISPLAY: &str = "block";
