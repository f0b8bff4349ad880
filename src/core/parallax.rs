//! Section parallax: local progress to vertical offset and opacity.

use super::keyframes::Keyframes;
use super::progress::Progress;

/// Style outputs of a parallax section for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxStyle {
    /// Vertical offset as a percentage of the section's own height.
    pub offset_percent: f64,
    pub opacity: f64,
}

impl ParallaxStyle {
    /// Resting style used when the section cannot be measured.
    pub const REST: ParallaxStyle = ParallaxStyle {
        offset_percent: 0.0,
        opacity: 1.0,
    };

    pub fn transform(&self) -> String {
        format!("translateY({}%)", self.offset_percent)
    }

    pub fn opacity(&self) -> String {
        self.opacity.to_string()
    }
}

impl Default for ParallaxStyle {
    fn default() -> Self {
        Self::REST
    }
}

/// Offset and opacity curves applied to a section's local progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    offset: Keyframes,
    opacity: Keyframes,
}

impl Parallax {
    /// Background lags by half the section height by the time it leaves.
    pub const MAX_OFFSET_PERCENT: f64 = 50.0;
    /// Fully opaque through the first half of the window.
    pub const FADE_FROM: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            offset: Keyframes::from_trusted(&[0.0, 1.0], &[0.0, Self::MAX_OFFSET_PERCENT]),
            opacity: Keyframes::from_trusted(&[0.0, Self::FADE_FROM, 1.0], &[1.0, 1.0, 0.0]),
        }
    }

    pub fn style(&self, progress: Progress) -> ParallaxStyle {
        ParallaxStyle {
            offset_percent: self.offset.sample(progress.into()),
            opacity: self.opacity.sample(progress.into()),
        }
    }

    /// Style for an optional measurement; `None` yields the rest state.
    pub fn style_or_rest(&self, progress: Option<Progress>) -> ParallaxStyle {
        progress.map_or(ParallaxStyle::REST, |p| self.style(p))
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_endpoints_and_midpoint() {
        let parallax = Parallax::new();
        assert_eq!(parallax.style(Progress::START).offset_percent, 0.0);
        assert_eq!(parallax.style(Progress::new(0.5)).offset_percent, 25.0);
        assert_eq!(parallax.style(Progress::END).offset_percent, 50.0);
    }

    #[test]
    fn test_opacity_curve() {
        let parallax = Parallax::new();
        assert_eq!(parallax.style(Progress::START).opacity, 1.0);
        assert_eq!(parallax.style(Progress::new(0.3)).opacity, 1.0);
        assert_eq!(parallax.style(Progress::new(0.5)).opacity, 1.0);
        assert_eq!(parallax.style(Progress::END).opacity, 0.0);
    }

    #[test]
    fn test_opacity_non_increasing_in_second_half() {
        let parallax = Parallax::new();
        let mut last = parallax.style(Progress::new(0.5)).opacity;
        for step in 1..=50 {
            let opacity = parallax.style(Progress::new(0.5 + step as f64 * 0.01)).opacity;
            assert!(opacity <= last);
            // Continuous: a 1% step never moves opacity by more than 2%.
            assert!(last - opacity <= 0.02 + f64::EPSILON);
            last = opacity;
        }
    }

    #[test]
    fn test_rest_state_without_measurement() {
        let parallax = Parallax::new();
        assert_eq!(parallax.style_or_rest(None), ParallaxStyle::REST);
        assert_eq!(ParallaxStyle::REST.transform(), "translateY(0%)");
        assert_eq!(ParallaxStyle::REST.opacity(), "1");
    }

    #[test]
    fn test_transform_string() {
        let style = Parallax::new().style(Progress::END);
        assert_eq!(style.transform(), "translateY(50%)");
        assert_eq!(style.opacity(), "0");
    }
}
