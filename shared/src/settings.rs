/*!
Runtime-adjustable game settings.

One struct owns every knob the settings menu can touch, and is passed by reference into the
movement step. The window mode uses an explicit requested/applied pair: the menu writes the
request, the windowing layer drains it with `take_window_mode_change` and applies it once.
*/

/// Mouse sensitivity range (degrees per pointer unit).
pub const SENSITIVITY_RANGE: (f32, f32) = (0.01, 0.5);
/// Vertical field of view range (degrees).
pub const FOV_RANGE: (f32, f32) = (50.0, 120.0);
/// Base move speed range (m/s).
pub const MOVE_SPEED_RANGE: (f32, f32) = (1.0, 20.0);

/// How the window is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowModeSetting {
    /// Normal resizable window at the default size, centered.
    #[default]
    Windowed,
    /// Undecorated window covering the monitor.
    Borderless,
    /// True exclusive fullscreen.
    Exclusive,
}

impl WindowModeSetting {
    pub const ALL: [WindowModeSetting; 3] = [
        WindowModeSetting::Windowed,
        WindowModeSetting::Borderless,
        WindowModeSetting::Exclusive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WindowModeSetting::Windowed => "Windowed",
            WindowModeSetting::Borderless => "Borderless Fullscreen",
            WindowModeSetting::Exclusive => "Exclusive Fullscreen",
        }
    }

    /// The next mode in menu order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            WindowModeSetting::Windowed => WindowModeSetting::Borderless,
            WindowModeSetting::Borderless => WindowModeSetting::Exclusive,
            WindowModeSetting::Exclusive => WindowModeSetting::Windowed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSettings {
    pub mouse_sensitivity: f32,
    /// Vertical field of view (degrees).
    pub fov_deg: f32,
    /// Base walking speed (m/s). Noclip and sprint scale this.
    pub move_speed: f32,
    pub show_fps: bool,
    pub default_width: u32,
    pub default_height: u32,
    window_mode: WindowModeSetting,
    applied_window_mode: WindowModeSetting,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.1,
            fov_deg: 70.0,
            move_speed: 7.0,
            show_fps: true,
            default_width: 1280,
            default_height: 720,
            window_mode: WindowModeSetting::Windowed,
            applied_window_mode: WindowModeSetting::Windowed,
        }
    }
}

impl GameSettings {
    /// The requested window mode (may not be applied yet).
    #[inline]
    pub fn window_mode(&self) -> WindowModeSetting {
        self.window_mode
    }

    pub fn set_window_mode(&mut self, mode: WindowModeSetting) {
        self.window_mode = mode;
    }

    /// F11 behaviour: Windowed goes Borderless, anything else goes back to Windowed.
    pub fn toggle_borderless(&mut self) {
        self.window_mode = match self.window_mode {
            WindowModeSetting::Windowed => WindowModeSetting::Borderless,
            _ => WindowModeSetting::Windowed,
        };
    }

    /// True while a requested mode has not been applied yet.
    #[inline]
    pub fn has_window_mode_change(&self) -> bool {
        self.window_mode != self.applied_window_mode
    }

    /// Returns the requested mode once if it differs from what was last applied, and marks it
    /// applied.
    pub fn take_window_mode_change(&mut self) -> Option<WindowModeSetting> {
        if !self.has_window_mode_change() {
            return None;
        }
        self.applied_window_mode = self.window_mode;
        Some(self.window_mode)
    }

    pub fn adjust_mouse_sensitivity(&mut self, delta: f32) {
        let (lo, hi) = SENSITIVITY_RANGE;
        self.mouse_sensitivity = (self.mouse_sensitivity + delta).clamp(lo, hi);
    }

    pub fn adjust_fov(&mut self, delta: f32) {
        let (lo, hi) = FOV_RANGE;
        self.fov_deg = (self.fov_deg + delta).clamp(lo, hi);
    }

    pub fn adjust_move_speed(&mut self, delta: f32) {
        let (lo, hi) = MOVE_SPEED_RANGE;
        self.move_speed = (self.move_speed + delta).clamp(lo, hi);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_values() {
        let s = GameSettings::default();
        assert_eq!(s.mouse_sensitivity, 0.1);
        assert_eq!(s.fov_deg, 70.0);
        assert_eq!(s.move_speed, 7.0);
        assert!(s.show_fps);
        assert_eq!((s.default_width, s.default_height), (1280, 720));
        assert_eq!(s.window_mode(), WindowModeSetting::Windowed);
    }

    #[test]
    fn window_mode_change_is_reported_once() {
        let mut s = GameSettings::default();
        assert_eq!(s.take_window_mode_change(), None);

        s.toggle_borderless();
        assert!(s.has_window_mode_change());
        assert_eq!(s.take_window_mode_change(), Some(WindowModeSetting::Borderless));
        assert!(!s.has_window_mode_change());
        assert_eq!(s.take_window_mode_change(), None);

        s.toggle_borderless();
        assert_eq!(s.take_window_mode_change(), Some(WindowModeSetting::Windowed));
    }

    #[test]
    fn setting_the_applied_mode_again_is_not_a_change() {
        let mut s = GameSettings::default();
        s.set_window_mode(WindowModeSetting::Exclusive);
        s.set_window_mode(WindowModeSetting::Windowed);
        assert_eq!(s.take_window_mode_change(), None);
    }

    #[test]
    fn toggle_from_exclusive_returns_to_windowed() {
        let mut s = GameSettings::default();
        s.set_window_mode(WindowModeSetting::Exclusive);
        s.toggle_borderless();
        assert_eq!(s.window_mode(), WindowModeSetting::Windowed);
    }

    #[test]
    fn next_cycles_through_all_modes() {
        let mut m = WindowModeSetting::Windowed;
        for expected in WindowModeSetting::ALL.iter().cycle().skip(1).take(3) {
            m = m.next();
            assert_eq!(m, *expected);
        }
    }

    #[test]
    fn adjusters_clamp_into_range() {
        let mut s = GameSettings::default();

        s.adjust_mouse_sensitivity(10.0);
        assert_eq!(s.mouse_sensitivity, SENSITIVITY_RANGE.1);
        s.adjust_mouse_sensitivity(-10.0);
        assert_eq!(s.mouse_sensitivity, SENSITIVITY_RANGE.0);

        s.adjust_fov(500.0);
        assert_eq!(s.fov_deg, FOV_RANGE.1);
        s.adjust_fov(-500.0);
        assert_eq!(s.fov_deg, FOV_RANGE.0);

        s.adjust_move_speed(5.0);
        assert_eq!(s.move_speed, 12.0);
        s.adjust_move_speed(-100.0);
        assert_eq!(s.move_speed, MOVE_SPEED_RANGE.0);
    }
}
