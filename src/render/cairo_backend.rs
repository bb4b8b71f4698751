use std::f64::consts::TAU;
use std::path::Path as FsPath;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, FontSpec, Path, PathCommand, StrokeStyle, TextHAlign};

/// Cairo + Pango drawing surface.
///
/// Either owns an offscreen ARGB32 image surface (`new`) or draws into an
/// externally supplied context (`from_context`), e.g. a GTK draw callback.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            image: Some(image),
        })
    }

    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            image: None,
        }
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    /// Writes the offscreen image as PNG. Fails for context-backed surfaces.
    pub fn write_png(&self, path: impl AsRef<FsPath>) -> ChartResult<()> {
        let image = self.image.as_ref().ok_or_else(|| {
            ChartError::Backend("surface has no offscreen image to export".to_owned())
        })?;
        let mut file = std::fs::File::create(path.as_ref())
            .map_err(|err| ChartError::Backend(format!("failed to create png file: {err}")))?;
        image
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn text_layout(&self, text: &str, font: FontSpec) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let weight = if font.bold { "Bold " } else { "" };
        let description = FontDescription::from_string(&format!("Sans {weight}{}px", font.size_px));
        layout.set_font_description(Some(&description));
        layout.set_text(text);
        layout
    }
}

impl DrawingSurface for CairoSurface {
    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> ChartResult<()> {
        apply_color(&self.context, color);
        self.context.rectangle(x, y, width, height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        self.context.new_path();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo { x, y } => self.context.move_to(x, y),
                PathCommand::LineTo { x, y } => self.context.line_to(x, y),
            }
        }
        apply_color(&self.context, style.color);
        self.context.set_line_width(style.width);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) -> ChartResult<()> {
        self.context.new_path();
        self.context.arc(cx, cy, radius, 0.0, TAU);
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))
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
        let layout = self.text_layout(text, font);
        let (text_width, _) = layout.pixel_size();
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        let left = match align {
            TextHAlign::Left => x,
            TextHAlign::Center => x - f64::from(text_width) / 2.0,
            TextHAlign::Right => x - f64::from(text_width),
        };

        apply_color(&self.context, color);
        self.context.move_to(left, y - baseline);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.context.new_path();
        Ok(())
    }

    fn measure_text(&mut self, text: &str, font: FontSpec) -> ChartResult<f64> {
        let (width, _) = self.text_layout(text, font).pixel_size();
        Ok(f64::from(width))
    }

    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))
    }

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()> {
        self.context.translate(dx, dy);
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> ChartResult<()> {
        self.context.rotate(radians);
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
