// Placeholder image generation
//
// Title slides without a background image fall back to a generated
// graphic: a neutral grey rect with a centered label, emitted as an SVG
// data URI. Pure function of (width, height, label) - identical inputs
// produce byte-identical output, no fetching involved.

/// Dimensions requested for the title-slide background placeholder.
pub const TITLE_BACKGROUND_WIDTH: u32 = 1920;
pub const TITLE_BACKGROUND_HEIGHT: u32 = 1080;

/// Literal label carried by generated placeholders.
pub const PLACEHOLDER_LABEL: &str = "Placeholder";

/// Build an SVG data URI for a fixed-size neutral placeholder graphic.
pub fn placeholder_svg(width: u32, height: u32, label: &str) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' \
         width='{width}' height='{height}'%3E%3Crect width='100%25' \
         height='100%25' fill='%23cccccc'/%3E%3Ctext x='50%25' y='50%25' \
         dominant-baseline='middle' text-anchor='middle' \
         font-family='sans-serif' font-size='24px' \
         fill='%23333333'%3E{label}%3C/text%3E%3C/svg%3E"
    )
}

/// The standard title-slide background placeholder.
pub fn title_background_placeholder() -> String {
    placeholder_svg(
        TITLE_BACKGROUND_WIDTH,
        TITLE_BACKGROUND_HEIGHT,
        PLACEHOLDER_LABEL,
    )
}
