//! Theme module for the date picker window
//!
//! Defines the PickerTheme palette and applies it to egui visuals.

use egui::Color32;

use crate::models::settings::ThemePreference;

/// Colors used by the picker beyond the stock egui visuals
#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window and panel background
    pub app_background: Color32,

    /// Background of the popup calendar
    pub popup_background: Color32,

    /// Day numbers of the displayed month
    pub day_text: Color32,

    /// Day numbers of the adjacent months
    pub other_month_text: Color32,

    /// Day numbers of blackout dates
    pub blackout_text: Color32,

    /// Inline invalid-format warning
    pub warning_text: Color32,
}

impl PickerTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            popup_background: Color32::from_rgb(255, 255, 255),
            day_text: Color32::from_rgb(40, 40, 40),
            other_month_text: Color32::from_rgb(160, 160, 160),
            blackout_text: Color32::from_rgb(200, 60, 60),
            warning_text: Color32::from_rgb(190, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            popup_background: Color32::from_rgb(40, 40, 40),
            day_text: Color32::from_rgb(240, 240, 240),
            other_month_text: Color32::from_rgb(120, 120, 120),
            blackout_text: Color32::from_rgb(240, 110, 110),
            warning_text: Color32::from_rgb(255, 130, 120),
        }
    }

    /// Resolve a configured preference, asking the desktop for `System`
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light => Self::light(),
                dark_light::Mode::Default => {
                    log::debug!("System theme unknown, using light theme");
                    Self::light()
                }
            },
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preferences() {
        assert_eq!(
            PickerTheme::for_preference(ThemePreference::Light),
            PickerTheme::light()
        );
        assert!(PickerTheme::for_preference(ThemePreference::Dark).is_dark);
    }

    #[test]
    fn test_other_month_text_is_muted() {
        let light = PickerTheme::light();
        assert_ne!(light.other_month_text, light.day_text);
        let dark = PickerTheme::dark();
        assert_ne!(dark.other_month_text, dark.day_text);
    }
}
