use tracing::trace;

use crate::render::DrawingSurface;

use super::ChartView;

impl<S: DrawingSurface> ChartView<S> {
    /// Shifts the window by `steps` points.
    ///
    /// Moves outside `0..=data_length - window_size` are ignored, not clamped.
    /// Any negative request turns auto-scroll off, accepted or not.
    pub fn scroll(&mut self, steps: i64) -> &mut Self {
        let max_len = self.data_length();
        let moved = self.view_window.try_shift(steps, max_len);
        if steps < 0 {
            self.auto_scroll = false;
        }
        trace!(
            steps,
            moved,
            start = self.view_window.start(),
            auto_scroll = self.auto_scroll,
            "scroll view window"
        );
        self
    }

    /// Moves the window start to `position`, same range rules as
    /// [`Self::scroll`].
    ///
    /// A target short of the newest data turns auto-scroll off even when the
    /// move itself is rejected.
    pub fn scroll_to(&mut self, position: i64) -> &mut Self {
        let max_len = self.data_length();
        let at_end = self.view_window.is_at_end(position, max_len);
        let moved = self.view_window.try_move_to(position, max_len);
        if !at_end {
            self.auto_scroll = false;
        }
        trace!(
            position,
            moved,
            at_end,
            auto_scroll = self.auto_scroll,
            "scroll view window to position"
        );
        self
    }

    pub fn scroll_to_start(&mut self) -> &mut Self {
        self.view_window.reset();
        self.auto_scroll = false;
        trace!("scroll view window to start");
        self
    }

    /// Shows the newest points and resumes following new data.
    pub fn scroll_to_end(&mut self) -> &mut Self {
        let max_len = self.data_length();
        self.view_window.jump_to_end(max_len);
        self.auto_scroll = true;
        trace!(start = self.view_window.start(), "scroll view window to end");
        self
    }

    pub fn enable_auto_scroll(&mut self) -> &mut Self {
        self.auto_scroll = true;
        self
    }

    pub fn disable_auto_scroll(&mut self) -> &mut Self {
        self.auto_scroll = false;
        self
    }

    pub fn toggle_auto_scroll(&mut self) -> &mut Self {
        self.auto_scroll = !self.auto_scroll;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ChartView, ChartViewConfig};
    use crate::core::DataPoint;
    use crate::render::RecordingSurface;

    fn retained_view(window: usize, points: usize) -> ChartView<RecordingSurface> {
        let config = ChartViewConfig::default()
            .with_retain_data(true)
            .with_view_window_size(window);
        let mut chart = ChartView::new(RecordingSurface::new(), config).expect("view init");
        chart.add_dataset(
            (0..points)
                .map(|i| DataPoint::new(i as f64, i as f64))
                .collect(),
            "",
        );
        chart
    }

    #[test]
    fn forward_scroll_keeps_auto_scroll() {
        let mut chart = retained_view(4, 10);
        chart.scroll(2);
        assert_eq!(chart.view_window().start(), 2);
        assert!(chart.is_auto_scroll());
    }

    #[test]
    fn rejected_backward_scroll_still_disables_auto_scroll() {
        let mut chart = retained_view(4, 10);
        chart.scroll(-1);
        assert_eq!(chart.view_window().start(), 0);
        assert!(!chart.is_auto_scroll());
    }

    #[test]
    fn scroll_past_end_is_ignored_not_clamped() {
        let mut chart = retained_view(4, 10);
        chart.scroll(5);
        chart.scroll(2);
        assert_eq!(chart.view_window().start(), 5);
    }

    #[test]
    fn scroll_to_end_position_keeps_auto_scroll() {
        let mut chart = retained_view(4, 10);
        chart.scroll_to(6);
        assert_eq!(chart.view_window().start(), 6);
        assert!(chart.is_auto_scroll());
    }

    #[test]
    fn rejected_scroll_to_before_end_disables_auto_scroll() {
        let mut chart = retained_view(4, 10);
        chart.scroll_to(-3);
        assert_eq!(chart.view_window().start(), 0);
        assert!(!chart.is_auto_scroll());
    }

    #[test]
    fn rejected_scroll_to_past_end_keeps_auto_scroll() {
        let mut chart = retained_view(4, 10);
        chart.scroll_to(8);
        assert_eq!(chart.view_window().start(), 0);
        assert!(chart.is_auto_scroll());
    }

    #[test]
    fn start_and_end_jumps_set_flag() {
        let mut chart = retained_view(4, 10);
        chart.scroll_to_end();
        assert_eq!(chart.view_window().start(), 6);
        assert!(chart.is_auto_scroll());

        chart.scroll_to_start();
        assert_eq!(chart.view_window().start(), 0);
        assert!(!chart.is_auto_scroll());
    }

    #[test]
    fn auto_scroll_toggles_do_not_move_window() {
        let mut chart = retained_view(4, 10);
        chart.scroll(3).toggle_auto_scroll();
        assert!(!chart.is_auto_scroll());
        chart.toggle_auto_scroll().disable_auto_scroll();
        assert!(!chart.is_auto_scroll());
        chart.enable_auto_scroll();
        assert!(chart.is_auto_scroll());
        assert_eq!(chart.view_window().start(), 3);
    }
}
