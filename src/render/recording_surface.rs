use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, FontSpec, Path, PathCommand, StrokeStyle, TextHAlign};

/// Approximate advance of one character relative to the font size.
const DEFAULT_CHAR_WIDTH_RATIO: f64 = 0.6;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    StrokePath {
        commands: Vec<PathCommand>,
        style: StrokeStyle,
    },
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font: FontSpec,
        color: Color,
        align: TextHAlign,
    },
    Save,
    Restore,
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate {
        radians: f64,
    },
}

/// Headless surface that records every draw call.
///
/// Used by tests and by hosts that only need layout results. It rejects
/// non-finite geometry and unbalanced `restore` calls so broken render passes
/// surface as errors instead of silently producing garbage. Text width is
/// estimated from the character count.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    char_width_ratio: f64,
    save_depth: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            char_width_ratio: DEFAULT_CHAR_WIDTH_RATIO,
            save_depth: 0,
        }
    }

    /// Overrides the per-character width estimate (fraction of font size).
    #[must_use]
    pub fn with_char_width_ratio(mut self, ratio: f64) -> Self {
        self.char_width_ratio = ratio;
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.save_depth = 0;
    }

    /// Every recorded text string, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::StrokePath { .. }))
            .count()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillCircle { .. }))
            .count()
    }

    fn push(&mut self, command: DrawCommand) -> ChartResult<()> {
        self.commands.push(command);
        Ok(())
    }
}

fn ensure_finite(what: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> ChartResult<()> {
        ensure_finite("rect", &[x, y, width, height])?;
        self.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        })
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        for command in path.commands() {
            let (PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y }) = *command;
            ensure_finite("path", &[x, y])?;
        }
        if !style.width.is_finite() || style.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.push(DrawCommand::StrokePath {
            commands: path.commands().to_vec(),
            style,
        })
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) -> ChartResult<()> {
        ensure_finite("circle", &[cx, cy, radius])?;
        self.push(DrawCommand::FillCircle {
            cx,
            cy,
            radius,
            color,
        })
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
        ensure_finite("text", &[x, y])?;
        self.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
            font,
            color,
            align,
        })
    }

    fn measure_text(&mut self, text: &str, font: FontSpec) -> ChartResult<f64> {
        Ok(text.chars().count() as f64 * font.size_px * self.char_width_ratio)
    }

    fn save(&mut self) -> ChartResult<()> {
        self.save_depth += 1;
        self.push(DrawCommand::Save)
    }

    fn restore(&mut self) -> ChartResult<()> {
        if self.save_depth == 0 {
            return Err(ChartError::Backend(
                "restore called without matching save".to_owned(),
            ));
        }
        self.save_depth -= 1;
        self.push(DrawCommand::Restore)
    }

    fn translate(&mut self, dx: f64, dy: f64) -> ChartResult<()> {
        ensure_finite("translate", &[dx, dy])?;
        self.push(DrawCommand::Translate { dx, dy })
    }

    fn rotate(&mut self, radians: f64) -> ChartResult<()> {
        ensure_finite("rotate", &[radians])?;
        self.push(DrawCommand::Rotate { radians })
    }
}
