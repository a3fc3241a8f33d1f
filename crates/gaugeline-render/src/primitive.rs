//! Primitive descriptors handed to an updater.
//!
//! A primitive is a complete, self-contained description of one graphic:
//! what to draw ([`PrimitiveShape`]), how to paint it ([`PrimitiveStyle`]),
//! whether it is visible, and how an updater should animate towards it.

use crate::{ArcShape, GradientArcShape, PieShape, PrimitiveStyle};
use gaugeline_core::math::DVec2;

/// An open or closed polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineShape {
    pub points: Vec<DVec2>,
    pub closed: bool,
}

impl PolylineShape {
    pub fn new(points: Vec<DVec2>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Center of the points' bounding box.
    pub fn bounds_center(&self) -> Option<DVec2> {
        let first = *self.points.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some((min + max) / 2.0)
    }
}

/// A run of text anchored at a position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub content: String,
    pub position: DVec2,
}

impl TextShape {
    pub fn new(content: impl Into<String>, position: DVec2) -> Self {
        Self {
            content: content.into(),
            position,
        }
    }
}

/// Geometry of a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveShape {
    Polyline(PolylineShape),
    Text(TextShape),
    Arc(ArcShape),
    GradientArc(GradientArcShape),
    Pie(PieShape),
}

impl PrimitiveShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            PrimitiveShape::Polyline(_) => ShapeKind::Polyline,
            PrimitiveShape::Text(_) => ShapeKind::Text,
            PrimitiveShape::Arc(_) => ShapeKind::Arc,
            PrimitiveShape::GradientArc(_) => ShapeKind::GradientArc,
            PrimitiveShape::Pie(_) => ShapeKind::Pie,
        }
    }
}

/// Discriminant of [`PrimitiveShape`], with the graph names updaters key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Polyline,
    Text,
    Arc,
    GradientArc,
    Pie,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Polyline => "polyline",
            ShapeKind::Text => "text",
            ShapeKind::Arc => "arc",
            ShapeKind::GradientArc => "agArc",
            ShapeKind::Pie => "pie",
        }
    }
}

/// Easing curve an updater should use when tweening to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseInCubic,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Map linear progress `t` in `0..=1` onto the curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Animation hints: the easing curve and its length in frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub curve: Easing,
    pub frames: u32,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            curve: Easing::EaseOutCubic,
            frames: 50,
        }
    }
}

/// One drawable graphic.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub visible: bool,
    pub animation: Animation,
    /// Render level; higher levels draw above lower ones.
    pub z_level: u32,
    pub shape: PrimitiveShape,
    pub style: PrimitiveStyle,
    /// Point that `rotate`/`scale` styling turns around. `None` uses the
    /// center of the shape's bounds.
    pub rotation_center: Option<DVec2>,
}

impl Primitive {
    pub fn new(shape: PrimitiveShape) -> Self {
        Self {
            visible: true,
            animation: Animation::default(),
            z_level: 0,
            shape,
            style: PrimitiveStyle::default(),
            rotation_center: None,
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_z_level(mut self, z_level: u32) -> Self {
        self.z_level = z_level;
        self
    }

    pub fn with_style(mut self, style: PrimitiveStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_rotation_center(mut self, center: DVec2) -> Self {
        self.rotation_center = Some(center);
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}
