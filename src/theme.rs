//! Centralized theme constants for Blog Home
//! Colors, sizes and frames used when painting the page

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_PAGE: Color32 = Color32::from_rgb(0xf5, 0xf1, 0xea); // paper
pub const BG_CARD: Color32 = Color32::from_rgb(0xff, 0xfd, 0xf8);
pub const BG_HEADER: Color32 = Color32::from_rgb(0x2f, 0x3e, 0x46); // slate
pub const BG_SIDEBAR: Color32 = Color32::from_rgb(0xec, 0xe6, 0xdb);

// =============================================================================
// COLORS - Accent
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xc0, 0x5c, 0x3c); // terracotta

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x6b, 0x65, 0x5c);
pub const TEXT_ON_DARK: Color32 = Color32::from_rgb(0xf5, 0xf1, 0xea);

// =============================================================================
// COLORS - Borders & buttons
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xdd, 0xd5, 0xc7);
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0xe4, 0xdc, 0xcf);
pub const BTN_DANGER: Color32 = Color32::from_rgb(0xb9, 0x1c, 0x1c);

// =============================================================================
// SIZES
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SIDEBAR_WIDTH: f32 = 240.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_PAGE,
        window_fill: BG_CARD,
        extreme_bg_color: BG_CARD,
        faint_bg_color: BG_SIDEBAR,
        hyperlink_color: ACCENT,
        override_text_color: Some(TEXT_PRIMARY),
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_HEADER)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_SIDEBAR)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_MD as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent button (Create Post, auth controls)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_ON_DARK))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Destructive actions like Delete
pub fn button_danger(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_ON_DARK))
        .fill(BTN_DANGER)
        .corner_radius(RADIUS_DEFAULT)
}
