//! Draws primitive lists onto a drawing context.

use crate::{Primitive, PrimitiveShape, ShapeResult, Transform2D};
use gaugeline_core::math::DVec2;
use gaugeline_core::profiling::profile_function;
use gaugeline_core::{Color, DrawContext, Paint};

/// Immediate-mode painter for [`Primitive`]s.
///
/// Style application follows canvas defaults: an unset fill is black, an
/// unset stroke is transparent.
pub struct Painter;

impl Painter {
    /// Draw every visible primitive in `primitives`, lowest `z_level` first.
    ///
    /// A primitive that fails validation is logged and skipped; the rest are
    /// still drawn. Returns the number of primitives drawn.
    pub fn draw_all(ctx: &mut dyn DrawContext, primitives: &[Primitive]) -> usize {
        profile_function!();

        let mut ordered: Vec<&Primitive> = primitives.iter().filter(|p| p.visible).collect();
        ordered.sort_by_key(|p| p.z_level);

        let mut drawn = 0;
        for primitive in ordered {
            match Self::draw(ctx, primitive) {
                Ok(()) => drawn += 1,
                Err(err) => {
                    tracing::error!(kind = primitive.kind().name(), "{}", err);
                }
            }
        }

        tracing::trace!(drawn, total = primitives.len(), "Painted primitives");
        drawn
    }

    /// Draw a single primitive, ignoring its visibility flag.
    pub fn draw(ctx: &mut dyn DrawContext, primitive: &Primitive) -> ShapeResult<()> {
        let style = &primitive.style;

        if let Some(width) = style.line_width {
            ctx.set_line_width(width);
        }
        ctx.set_stroke(Paint::solid(style.stroke.unwrap_or(Color::TRANSPARENT)));
        ctx.set_fill(Paint::solid(style.fill.unwrap_or(Color::BLACK)));

        match &primitive.shape {
            PrimitiveShape::Polyline(polyline) => {
                let transform = Self::transform_for(primitive, polyline.bounds_center());
                let mut points = polyline.points.iter().map(|p| transform.transform_point(*p));

                let Some(first) = points.next() else {
                    return Ok(());
                };

                ctx.begin_path();
                ctx.move_to(first);
                for point in points {
                    ctx.line_to(point);
                }
                if polyline.closed {
                    ctx.close_path();
                    ctx.fill();
                }
                ctx.stroke();
                Ok(())
            }
            PrimitiveShape::Text(text) => {
                let transform = Self::transform_for(primitive, Some(text.position));
                ctx.fill_text(
                    &text.content,
                    transform.transform_point(text.position),
                    &style.text_style(),
                );
                Ok(())
            }
            PrimitiveShape::Arc(arc) => arc.draw(ctx),
            PrimitiveShape::GradientArc(arc) => {
                let colors = style.gradient.as_deref().unwrap_or_default();
                arc.draw(ctx, colors)
            }
            PrimitiveShape::Pie(pie) => pie.draw(ctx),
        }
    }

    fn transform_for(primitive: &Primitive, fallback_center: Option<DVec2>) -> Transform2D {
        let style = &primitive.style;
        if !style.has_transform() {
            return Transform2D::IDENTITY;
        }

        let center = primitive
            .rotation_center
            .or(fallback_center)
            .unwrap_or(DVec2::ZERO);

        Transform2D::rotate_scale_about(
            center,
            style.rotate.unwrap_or(0.0),
            style.scale.unwrap_or(DVec2::ONE),
        )
    }
}
