use crate::estimator::Estimator;
use crate::scoring::{Factor, ScoreResult};
use crate::tui::theme::ThemeColors;
use std::time::{Duration, Instant};

const FLASH_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
    ScoreBreakdown,
}

pub struct App {
    pub estimator: Estimator,
    pub selected: usize,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub theme: ThemeColors,
    pub tick_rate_ms: u64,
}

impl App {
    pub fn new(estimator: Estimator, theme: ThemeColors, tick_rate_ms: u64) -> Self {
        Self {
            estimator,
            selected: 0,
            input_mode: InputMode::Normal,
            flash_message: None,
            should_quit: false,
            theme,
            tick_rate_ms,
        }
    }

    pub fn selected_factor(&self) -> Factor {
        Factor::ALL[self.selected % Factor::ALL.len()]
    }

    /// Current result, recomputed from the estimator's inputs.
    pub fn result(&self) -> ScoreResult {
        self.estimator.result()
    }

    pub fn next_factor(&mut self) {
        self.selected = (self.selected + 1) % Factor::ALL.len();
    }

    pub fn previous_factor(&mut self) {
        self.selected = if self.selected == 0 {
            Factor::ALL.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn increase_selected(&mut self) {
        let factor = self.selected_factor();
        if !self.estimator.increment(factor) {
            self.show_bound_flash(factor);
        }
    }

    pub fn decrease_selected(&mut self) {
        let factor = self.selected_factor();
        if !self.estimator.decrement(factor) {
            self.show_bound_flash(factor);
        }
    }

    pub fn selected_to_max(&mut self) {
        let factor = self.selected_factor();
        if !self.estimator.set_to_max(factor) {
            self.show_bound_flash(factor);
        }
    }

    pub fn selected_to_min(&mut self) {
        let factor = self.selected_factor();
        if !self.estimator.set_to_min(factor) {
            self.show_bound_flash(factor);
        }
    }

    /// Restore the starting values
    pub fn reset(&mut self) {
        if self.estimator.is_at_initial() {
            self.show_flash("Already at starting values".to_string());
        } else {
            self.estimator.reset();
            self.show_flash("Reset to starting values".to_string());
        }
    }

    fn show_bound_flash(&mut self, factor: Factor) {
        let value = self.estimator.value(factor);
        let which = if value == factor.max() { "maximum" } else { "minimum" };
        self.show_flash(format!(
            "{} is already at its {} ({})",
            factor.name(),
            which,
            factor.format_value(value)
        ));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed() >= FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    /// Show help overlay
    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Dismiss help overlay
    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Show score breakdown overlay
    pub fn show_score_breakdown(&mut self) {
        self.input_mode = InputMode::ScoreBreakdown;
    }

    /// Dismiss score breakdown overlay
    pub fn dismiss_score_breakdown(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
