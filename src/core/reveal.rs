//! Reveal-on-view entrance animations.

use std::time::Duration;

/// One-way flag: false until the element first enters the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntranceFlag {
    entered: bool,
}

impl EntranceFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Feed one intersection report. Returns true only on the flip.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }
        self.entered = true;
        true
    }
}

/// Visual state of a revealed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in pixels.
    pub offset_y: f64,
}

impl Pose {
    pub const SETTLED: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub const fn hidden(offset_y: f64) -> Self {
        Self {
            opacity: 0.0,
            offset_y,
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.offset_y)
    }

    pub fn opacity(&self) -> String {
        self.opacity.to_string()
    }
}

/// Entrance animation from an entry pose to [`Pose::SETTLED`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub duration: Duration,
    pub delay: Duration,
}

impl Entrance {
    /// CSS easing matching an ease-out tween.
    pub const EASING: &'static str = "cubic-bezier(0, 0, 0.58, 1)";

    /// Slide up 50px while fading in over 0.8s.
    pub const fn rise(delay_ms: u64) -> Self {
        Self {
            from: Pose::hidden(50.0),
            duration: Duration::from_millis(800),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub const TITLE: Entrance = Entrance::rise(200);
    pub const DESCRIPTION: Entrance = Entrance::rise(400);
    pub const BUTTON: Entrance = Entrance::rise(600);

    pub const HERO_HEADLINE: Entrance = Entrance {
        from: Pose::hidden(-50.0),
        duration: Duration::from_millis(1000),
        delay: Duration::ZERO,
    };
    pub const HERO_SUBTITLE: Entrance = Entrance {
        from: Pose::hidden(50.0),
        duration: Duration::from_millis(1000),
        delay: Duration::from_millis(200),
    };
    pub const HERO_SCROLL_HINT: Entrance = Entrance {
        from: Pose::hidden(0.0),
        duration: Duration::from_millis(1000),
        delay: Duration::from_millis(400),
    };

    /// Entry pose before the element has entered, settled pose after.
    pub fn pose(&self, entered: bool) -> Pose {
        if entered {
            Pose::SETTLED
        } else {
            self.from
        }
    }

    /// `transition` declaration animating opacity and transform.
    pub fn transition(&self) -> String {
        let duration = self.duration.as_secs_f64();
        let delay = self.delay.as_secs_f64();
        format!(
            "opacity {duration}s {easing} {delay}s, transform {duration}s {easing} {delay}s",
            easing = Self::EASING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_starts_false() {
        assert!(!EntranceFlag::new().is_entered());
    }

    #[test]
    fn test_flag_flips_once() {
        let mut flag = EntranceFlag::new();

        assert!(!flag.observe(false));
        assert!(!flag.is_entered());

        assert!(flag.observe(true));
        assert!(flag.is_entered());

        // Leaving and re-entering never flips again.
        assert!(!flag.observe(false));
        assert!(!flag.observe(true));
        assert!(flag.is_entered());
    }

    #[test]
    fn test_pose_follows_flag() {
        let entrance = Entrance::TITLE;
        let mut flag = EntranceFlag::new();

        assert_eq!(entrance.pose(flag.is_entered()), Pose::hidden(50.0));
        flag.observe(true);
        assert_eq!(entrance.pose(flag.is_entered()), Pose::SETTLED);
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(Entrance::TITLE.delay, Duration::from_millis(200));
        assert_eq!(Entrance::DESCRIPTION.delay, Duration::from_millis(400));
        assert_eq!(Entrance::BUTTON.delay, Duration::from_millis(600));
        assert_eq!(Entrance::BUTTON.duration, Duration::from_millis(800));
    }

    #[test]
    fn test_transition_declaration() {
        assert_eq!(
            Entrance::DESCRIPTION.transition(),
            "opacity 0.8s cubic-bezier(0, 0, 0.58, 1) 0.4s, \
             transform 0.8s cubic-bezier(0, 0, 0.58, 1) 0.4s"
        );
        assert_eq!(
            Entrance::HERO_HEADLINE.transition(),
            "opacity 1s cubic-bezier(0, 0, 0.58, 1) 0s, \
             transform 1s cubic-bezier(0, 0, 0.58, 1) 0s"
        );
    }

    #[test]
    fn test_pose_strings() {
        assert_eq!(Pose::hidden(50.0).transform(), "translateY(50px)");
        assert_eq!(Pose::hidden(-50.0).transform(), "translateY(-50px)");
        assert_eq!(Pose::SETTLED.opacity(), "1");
    }
}
