/// Navigation behavior of the widget.
#[derive(Debug, Clone)]
pub struct SettingsNavigation {
    /// Primary-button drag rotates the model
    pub rotation_enabled: bool,

    /// Middle-button drag translates the model
    pub translation_enabled: bool,

    /// Wheel scroll over the widget zooms
    pub zoom_enabled: bool,

    /// R/O/P keys while the pointer is over the widget
    pub shortcuts_enabled: bool,

    /// Degrees of rotation per pixel of drag
    pub rotation_speed: f32,

    /// World units of translation per pixel of drag
    pub translation_speed: f32,

    /// Multiplicative wheel step minus one
    pub zoom_speed: f32,
}

impl Default for SettingsNavigation {
    fn default() -> Self {
        Self {
            rotation_enabled: true,
            translation_enabled: true,
            zoom_enabled: true,
            shortcuts_enabled: true,
            rotation_speed: 1.,
            translation_speed: 0.25,
            zoom_speed: 0.1,
        }
    }
}
