//! Centralized theme constants for Stars Admin
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0b, 0x0b, 0x12); // night
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x16, 0x16, 0x22);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x24, 0x24, 0x33);
pub const BG_HOVER: Color32 = Color32::from_rgb(0x1e, 0x1b, 0x3a); // indigo tint

// =============================================================================
// COLORS - Accent (Indigo)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x81, 0x8c, 0xf8); // indigo-400
const ACCENT_TEXT: Color32 = Color32::from_rgb(0x1e, 0x1b, 0x4b); // indigo-950

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x3a);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x33, 0x47);
pub const BTN_DANGER: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600

// =============================================================================
// COLORS - Star colours
// =============================================================================

/// Row tint and text colour for a star's `color` value.
/// Returns (bg_color ~6% alpha, text_color); unknown colours render neutral.
pub fn star_colors(color: &str) -> (Color32, Color32) {
    let rgb = match color.to_ascii_uppercase().as_str() {
        "RED" => Some((0xf8, 0x71, 0x71)),
        "BLUE" => Some((0x60, 0xa5, 0xfa)),
        "YELLOW" => Some((0xfb, 0xbf, 0x24)),
        "WHITE" => Some((0xe4, 0xe4, 0xe7)),
        "BLACK" => Some((0x71, 0x71, 0x7a)),
        _ => None,
    };
    match rgb {
        Some((r, g, b)) => (
            Color32::from_rgba_unmultiplied(r, g, b, 10),
            Color32::from_rgb(r, g, b),
        ),
        None => (
            Color32::from_rgba_unmultiplied(0xa1, 0xa1, 0xaa, 10),
            TEXT_MUTED,
        ),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// RADIUS / STROKE / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

pub const STROKE_DEFAULT: f32 = 1.0;
const STROKE_MEDIUM: f32 = 1.5;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

fn widget_visuals(
    bg_fill: Color32,
    weak_bg_fill: Color32,
    border: Option<Color32>,
    fg: (f32, Color32),
) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill,
        weak_bg_fill,
        bg_stroke: border.map_or(egui::Stroke::NONE, |c| egui::Stroke::new(STROKE_DEFAULT, c)),
        fg_stroke: egui::Stroke::new(fg.0, fg.1),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    }
}

pub fn apply_visuals(ctx: &egui::Context) {
    let pressed = Color32::from_rgb(0x2c, 0x2a, 0x48);
    let mut active = widget_visuals(pressed, pressed, None, (STROKE_DEFAULT, TEXT_PRIMARY));
    active.expansion = -1.0;

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x37, 0x30, 0x6b),
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: widget_visuals(
                BG_ELEVATED,
                BG_SURFACE,
                Some(BORDER_SUBTLE),
                (STROKE_DEFAULT, TEXT_PRIMARY),
            ),
            inactive: widget_visuals(
                Color32::TRANSPARENT,
                BG_ELEVATED,
                Some(BORDER_SUBTLE),
                (STROKE_DEFAULT, TEXT_SECONDARY),
            ),
            hovered: widget_visuals(BG_HOVER, BG_SURFACE, None, (STROKE_MEDIUM, TEXT_PRIMARY)),
            active,
            open: widget_visuals(
                BG_SURFACE,
                BG_ELEVATED,
                Some(BORDER_SUBTLE),
                (STROKE_DEFAULT, TEXT_PRIMARY),
            ),
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED.gamma_multiply(0.6))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent button for primary actions (Create, current page)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_TEXT))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Red button for destructive actions
pub fn button_danger(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_DANGER)
        .corner_radius(RADIUS_DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_colors_ignore_case() {
        assert_eq!(star_colors("blue"), star_colors("BLUE"));
        assert_eq!(star_colors("RED").1, Color32::from_rgb(0xf8, 0x71, 0x71));
    }

    #[test]
    fn unknown_star_color_is_neutral() {
        assert_eq!(star_colors("PLAID").1, TEXT_MUTED);
    }
}
