use crate::core::{Dataset, PlotArea};
use crate::error::ChartResult;

pub(super) const LEGEND_OFFSET_Y_PX: f64 = 15.0;
pub(super) const LEGEND_SWATCH_LENGTH_PX: f64 = 15.0;
pub(super) const LEGEND_TEXT_OFFSET_X_PX: f64 = 20.0;
pub(super) const LEGEND_TEXT_BASELINE_SHIFT_PX: f64 = 3.0;
/// Room reserved after the label when checking whether an entry fits.
const LEGEND_FIT_MARGIN_PX: f64 = 30.0;
/// Cursor advance after the label text.
const LEGEND_ENTRY_ADVANCE_PX: f64 = 40.0;

/// Placement of one legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub dataset_index: usize,
    pub swatch_x: f64,
    pub text_x: f64,
    pub y: f64,
}

/// Lays out legend entries left to right above the plot area.
///
/// Unlabeled datasets are skipped. Placement stops at the first labeled
/// entry that would overflow the plot width; later entries are dropped
/// rather than wrapped.
pub(super) fn layout_legend(
    datasets: &[Dataset],
    area: PlotArea,
    mut measure: impl FnMut(&str) -> ChartResult<f64>,
) -> ChartResult<Vec<LegendEntry>> {
    let y = area.y - LEGEND_OFFSET_Y_PX;
    let mut cursor = area.x;
    let mut entries = Vec::new();

    for (dataset_index, dataset) in datasets.iter().enumerate() {
        if !dataset.has_label() {
            continue;
        }
        let text_width = measure(dataset.label())?;
        if cursor + text_width + LEGEND_FIT_MARGIN_PX > area.right() {
            break;
        }
        entries.push(LegendEntry {
            dataset_index,
            swatch_x: cursor,
            text_x: cursor + LEGEND_TEXT_OFFSET_X_PX,
            y,
        });
        cursor += text_width + LEGEND_ENTRY_ADVANCE_PX;
    }

    Ok(entries)
}
