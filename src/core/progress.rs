//! Scroll progress primitives
//!
//! Everything here is a pure function of layout numbers handed in by the
//! browser layer, so the whole pipeline can be exercised natively.

use std::str::FromStr;

use derive_more::Into;

/// Normalized scroll progress, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Into)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamp a raw ratio into `[0, 1]`. NaN becomes 0.
    pub fn new(ratio: f64) -> Self {
        if ratio.is_nan() {
            return Self::START;
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    /// Position of `value` between `from` and `to`.
    ///
    /// A degenerate range (`from == to`) has no meaningful ratio and yields 0.
    pub fn between(value: f64, from: f64, to: f64) -> Self {
        let span = to - from;
        if span == 0.0 || !span.is_finite() {
            return Self::START;
        }
        Self::new((value - from) / span)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Scroll metrics of the whole document, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    /// Largest reachable `scroll_y`.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Page-wide progress: scrolled distance over scrollable distance.
    pub fn document_progress(&self) -> Progress {
        Progress::between(self.scroll_y, 0.0, self.max_scroll())
    }

    /// Same metrics at a different scroll position.
    pub fn scrolled_to(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }
}

/// Document-relative geometry of a measured element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
}

impl ElementGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether any part of the element overlaps the viewport.
    pub fn intersects_viewport(&self, metrics: &ScrollMetrics) -> bool {
        self.height > 0.0
            && self.top < metrics.scroll_y + metrics.viewport_height
            && self.bottom() > metrics.scroll_y
    }
}

/// A point along an element or the viewport, as a fraction of its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
            Edge::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Edge::Start),
            "center" => Ok(Edge::Center),
            "end" => Ok(Edge::End),
            other => {
                let value: f64 = other
                    .parse()
                    .map_err(|_| AnchorParseError::UnknownEdge(other.to_string()))?;
                if (0.0..=1.0).contains(&value) {
                    Ok(Edge::Fraction(value))
                } else {
                    Err(AnchorParseError::FractionOutOfRange(value))
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnchorParseError {
    #[error("Expected \"<element-edge> <viewport-edge>\", got {0:?}")]
    Malformed(String),

    #[error("Unknown edge: {0:?}")]
    UnknownEdge(String),

    #[error("Edge fraction {0} is outside [0, 1]")]
    FractionOutOfRange(f64),
}

/// Moment an element edge lines up with a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnchor {
    pub element: Edge,
    pub viewport: Edge,
}

impl ScrollAnchor {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Parse the `"start start"` landmark syntax.
    pub fn parse(s: &str) -> Result<Self, AnchorParseError> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(AnchorParseError::Malformed(s.to_string())),
        }
    }

    /// Scroll offset at which this anchor is reached.
    pub fn scroll_offset(&self, element: &ElementGeometry, viewport_height: f64) -> f64 {
        element.top + self.element.fraction() * element.height
            - self.viewport.fraction() * viewport_height
    }
}

/// Pair of anchors mapping global scroll into local progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    pub enter: ScrollAnchor,
    pub leave: ScrollAnchor,
}

impl ScrollWindow {
    /// "start start" to "end start": the element scrolls out through the top.
    pub const EXIT_THROUGH_TOP: ScrollWindow = ScrollWindow {
        enter: ScrollAnchor::new(Edge::Start, Edge::Start),
        leave: ScrollAnchor::new(Edge::End, Edge::Start),
    };

    pub const fn new(enter: ScrollAnchor, leave: ScrollAnchor) -> Self {
        Self { enter, leave }
    }

    /// Scroll offsets at which local progress reaches 0 and 1.
    pub fn offsets(&self, element: &ElementGeometry, viewport_height: f64) -> (f64, f64) {
        (
            self.enter.scroll_offset(element, viewport_height),
            self.leave.scroll_offset(element, viewport_height),
        )
    }

    /// Local progress of `element` at the given scroll metrics.
    ///
    /// Unmeasured elements and zero-length windows report 0.
    pub fn progress(&self, element: Option<&ElementGeometry>, metrics: &ScrollMetrics) -> Progress {
        let Some(element) = element else {
            return Progress::START;
        };
        let (from, to) = self.offsets(element, metrics.viewport_height);
        Progress::between(metrics.scroll_y, from, to)
    }
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::EXIT_THROUGH_TOP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> ScrollMetrics {
        // Four 800px sections plus a 300px footer in an 800px viewport.
        ScrollMetrics::new(0.0, 800.0, 3500.0)
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Progress::new(-0.5).value(), 0.0);
        assert_eq!(Progress::new(1.5).value(), 1.0);
        assert_eq!(Progress::new(0.25).value(), 0.25);
        assert_eq!(Progress::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn test_progress_converts_to_f64() {
        assert_eq!(f64::from(Progress::new(0.75)), 0.75);
        assert_eq!(f64::from(Progress::END), 1.0);
    }

    #[test]
    fn test_progress_between_degenerate_range() {
        assert_eq!(Progress::between(10.0, 5.0, 5.0), Progress::START);
    }

    #[test]
    fn test_document_progress_endpoints() {
        let metrics = page();
        assert_eq!(metrics.max_scroll(), 2700.0);
        assert_eq!(metrics.document_progress(), Progress::START);
        assert_eq!(metrics.scrolled_to(2700.0).document_progress(), Progress::END);
        assert_eq!(metrics.scrolled_to(1350.0).document_progress().value(), 0.5);
    }

    #[test]
    fn test_document_progress_monotonic() {
        let metrics = page();
        let mut last = Progress::START;
        for step in 0..=270 {
            let progress = metrics.scrolled_to(step as f64 * 10.0).document_progress();
            assert!(progress >= last);
            assert!((0.0..=1.0).contains(&progress.value()));
            last = progress;
        }
    }

    #[test]
    fn test_document_shorter_than_viewport() {
        let metrics = ScrollMetrics::new(0.0, 800.0, 600.0);
        assert_eq!(metrics.max_scroll(), 0.0);
        assert_eq!(metrics.document_progress(), Progress::START);
    }

    #[test]
    fn test_parse_anchor() {
        let anchor = ScrollAnchor::parse("end start").unwrap();
        assert_eq!(anchor, ScrollAnchor::new(Edge::End, Edge::Start));

        let anchor = ScrollAnchor::parse("  0.25   center ").unwrap();
        assert_eq!(anchor, ScrollAnchor::new(Edge::Fraction(0.25), Edge::Center));
    }

    #[test]
    fn test_parse_anchor_errors() {
        assert!(matches!(
            ScrollAnchor::parse("start"),
            Err(AnchorParseError::Malformed(_))
        ));
        assert!(matches!(
            ScrollAnchor::parse("start start start"),
            Err(AnchorParseError::Malformed(_))
        ));
        assert!(matches!(
            ScrollAnchor::parse("top start"),
            Err(AnchorParseError::UnknownEdge(_))
        ));
        assert_eq!(
            ScrollAnchor::parse("1.5 start"),
            Err(AnchorParseError::FractionOutOfRange(1.5))
        );
    }

    #[test]
    fn test_window_landmarks() {
        let section = ElementGeometry::new(800.0, 800.0);
        let window = ScrollWindow::EXIT_THROUGH_TOP;
        let metrics = page();

        assert_eq!(window.offsets(&section, 800.0), (800.0, 1600.0));
        assert_eq!(
            window.progress(Some(&section), &metrics.scrolled_to(800.0)),
            Progress::START
        );
        assert_eq!(
            window.progress(Some(&section), &metrics.scrolled_to(1200.0)).value(),
            0.5
        );
        assert_eq!(
            window.progress(Some(&section), &metrics.scrolled_to(1600.0)),
            Progress::END
        );
    }

    #[test]
    fn test_window_clamps_outside_range() {
        let section = ElementGeometry::new(800.0, 800.0);
        let window = ScrollWindow::EXIT_THROUGH_TOP;
        let metrics = page();

        assert_eq!(
            window.progress(Some(&section), &metrics.scrolled_to(100.0)),
            Progress::START
        );
        assert_eq!(
            window.progress(Some(&section), &metrics.scrolled_to(2500.0)),
            Progress::END
        );
    }

    #[test]
    fn test_window_degrades_without_measurement() {
        let window = ScrollWindow::default();
        let metrics = page().scrolled_to(1000.0);

        assert_eq!(window.progress(None, &metrics), Progress::START);

        let collapsed = ElementGeometry::new(800.0, 0.0);
        assert_eq!(window.progress(Some(&collapsed), &metrics), Progress::START);
    }

    #[test]
    fn test_intersects_viewport() {
        let title = ElementGeometry::new(1100.0, 60.0);
        let metrics = page();

        assert!(!title.intersects_viewport(&metrics));
        assert!(!title.intersects_viewport(&metrics.scrolled_to(300.0)));
        assert!(title.intersects_viewport(&metrics.scrolled_to(301.0)));
        assert!(title.intersects_viewport(&metrics.scrolled_to(1159.0)));
        assert!(!title.intersects_viewport(&metrics.scrolled_to(1160.0)));

        let collapsed = ElementGeometry::new(1100.0, 0.0);
        assert!(!collapsed.intersects_viewport(&metrics.scrolled_to(1000.0)));
    }

    #[test]
    fn test_viewport_relative_window() {
        // "start end" to "end end": element scrolls in from the bottom.
        let window = ScrollWindow::new(
            ScrollAnchor::parse("start end").unwrap(),
            ScrollAnchor::parse("end end").unwrap(),
        );
        let section = ElementGeometry::new(1600.0, 800.0);
        assert_eq!(window.offsets(&section, 800.0), (800.0, 1600.0));
    }
}
