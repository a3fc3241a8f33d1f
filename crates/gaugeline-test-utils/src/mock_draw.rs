//! Recording implementation of `DrawContext` for testing.

use gaugeline_core::math::DVec2;
use gaugeline_core::{DrawContext, Paint, TextStyle};

/// Records a drawing command for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    BeginPath,
    ClosePath,
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    SetStroke(Paint),
    SetFill(Paint),
    SetLineWidth(f64),
    Stroke,
    Fill,
    FillText {
        text: String,
        position: DVec2,
        style: TextStyle,
    },
}

/// An arc that was stroked, together with the paint active at stroke time.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedArc {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub counter_clockwise: bool,
    pub paint: Option<Paint>,
}

/// Mock drawing context that records calls instead of drawing.
///
/// # Example
///
/// ```rust
/// use gaugeline_core::{Color, DrawContext, Paint};
/// use gaugeline_core::math::DVec2;
/// use gaugeline_test_utils::MockDrawContext;
///
/// let mut mock = MockDrawContext::new();
/// mock.begin_path();
/// mock.arc(DVec2::ZERO, 5.0, 0.0, 1.0, false);
/// mock.set_stroke(Paint::solid(Color::RED));
/// mock.stroke();
///
/// let arcs = mock.stroked_arcs();
/// assert_eq!(arcs.len(), 1);
/// assert_eq!(arcs[0].paint, Some(Paint::solid(Color::RED)));
/// ```
#[derive(Debug, Default)]
pub struct MockDrawContext {
    calls: Vec<DrawCall>,
}

impl MockDrawContext {
    /// Create a new mock draw context.
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Count stroke operations.
    pub fn count_strokes(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::Stroke))
    }

    /// Count fill operations.
    pub fn count_fills(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::Fill))
    }

    /// Count begun paths.
    pub fn count_paths(&self) -> usize {
        self.count(|call| matches!(call, DrawCall::BeginPath))
    }

    /// Texts drawn with `fill_text`, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every arc that ended up stroked, paired with the stroke paint that was
    /// current when `stroke` was called.
    pub fn stroked_arcs(&self) -> Vec<StrokedArc> {
        let mut stroked = Vec::new();
        let mut pending = Vec::new();
        let mut paint = None;

        for call in &self.calls {
            match call {
                DrawCall::BeginPath => pending.clear(),
                DrawCall::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    counter_clockwise,
                } => pending.push(StrokedArc {
                    center: *center,
                    radius: *radius,
                    start_angle: *start_angle,
                    end_angle: *end_angle,
                    counter_clockwise: *counter_clockwise,
                    paint: None,
                }),
                DrawCall::SetStroke(p) => paint = Some(p.clone()),
                DrawCall::Stroke => {
                    stroked.extend(pending.iter().cloned().map(|mut arc| {
                        arc.paint = paint.clone();
                        arc
                    }));
                }
                _ => {}
            }
        }

        stroked
    }

    fn count(&self, predicate: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl DrawContext for MockDrawContext {
    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }

    fn move_to(&mut self, point: DVec2) {
        self.calls.push(DrawCall::MoveTo(point));
    }

    fn line_to(&mut self, point: DVec2) {
        self.calls.push(DrawCall::LineTo(point));
    }

    fn arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    ) {
        self.calls.push(DrawCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            counter_clockwise,
        });
    }

    fn set_stroke(&mut self, paint: Paint) {
        self.calls.push(DrawCall::SetStroke(paint));
    }

    fn set_fill(&mut self, paint: Paint) {
        self.calls.push(DrawCall::SetFill(paint));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::SetLineWidth(width));
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn fill_text(&mut self, text: &str, position: DVec2, style: &TextStyle) {
        self.calls.push(DrawCall::FillText {
            text: text.to_string(),
            position,
            style: *style,
        });
    }
}
