mod primitives;
mod recording_surface;

pub use primitives::{Color, FontSpec, Path, PathCommand, StrokeStyle, TextHAlign};
pub use recording_surface::{DrawCommand, RecordingSurface};

use crate::error::ChartResult;

/// Immediate-mode 2D drawing capability consumed by a chart view.
///
/// Coordinates are device pixels with y growing downward, before the current
/// transform is applied. Implementations own any backend resources; the
/// chart view never duplicates or shares the surface.
pub trait DrawingSurface {
    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> ChartResult<()>;

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()>;

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) -> ChartResult<()>;

    /// Draws `text` with its baseline at `y`, aligned horizontally on `x`.
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: FontSpec,
        color: Color,
        align: TextHAlign,
    ) -> ChartResult<()>;

    fn measure_text(&mut self, text: &str, font: FontSpec) -> ChartResult<f64>;

    fn save(&mut self) -> ChartResult<()>;

    fn restore(&mut self) -> ChartResult<()>;

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()>;

    /// Rotates subsequent drawing by `radians` (clockwise on screen).
    fn rotate(&mut self, radians: f64) -> ChartResult<()>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> ChartResult<()> {
        (**self).fill_rect(x, y, width, height, color)
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        (**self).stroke_path(path, style)
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) -> ChartResult<()> {
        (**self).fill_circle(cx, cy, radius, color)
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: FontSpec,
        color: Color,
        align: TextHAlign,
    ) -> ChartResult<()> {
        (**self).fill_text(text, x, y, font, color, align)
    }

    fn measure_text(&mut self, text: &str, font: FontSpec) -> ChartResult<f64> {
        (**self).measure_text(text, font)
    }

    fn save(&mut self) -> ChartResult<()> {
        (**self).save()
    }

    fn restore(&mut self) -> ChartResult<()> {
        (**self).restore()
    }

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()> {
        (**self).translate(dx, dy)
    }

    fn rotate(&mut self, radians: f64) -> ChartResult<()> {
        (**self).rotate(radians)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
