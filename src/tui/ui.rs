use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::scoring::{Band, Factor, ScoreResult, SCORE_MAX, SCORE_MIN};
use crate::tui::app::{App, InputMode};
use crate::tui::theme::ThemeColors;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Computed once per frame from the live inputs
    let result = app.result();

    // Layout: Title(1) + Subtitle(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_subtitle(frame, chunks[1], app);

    let body = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_factors(frame, body[0], app);

    let right = Layout::vertical([Constraint::Length(7), Constraint::Fill(1)]).split(body[1]);
    render_score_card(frame, right[0], app, &result);
    render_recommendations(frame, right[1], app, &result);

    render_status_bar(frame, chunks[3], app);

    // Render overlays based on input mode
    match app.input_mode {
        InputMode::Help => render_help_popup(frame, &app.theme),
        InputMode::ScoreBreakdown => render_breakdown_popup(frame, &app.theme, &result),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled("Credit Score Calculator", Style::default().fg(app.theme.title_color).bold()),
        Span::styled("  Interactive Simulator", Style::default().fg(app.theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_subtitle(frame: &mut Frame, area: Rect, app: &App) {
    let subtitle = Paragraph::new(
        "Adjust the factors below to see how your credit score can change in real time.",
    )
    .style(Style::default().fg(app.theme.muted));
    frame.render_widget(subtitle, area);
}

fn render_factors(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::bordered()
        .title(" Credit Factors ")
        .border_style(Style::default().fg(theme.panel_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let selected = app.selected_factor();
    let mut lines = Vec::with_capacity(Factor::ALL.len() * 3);

    for factor in Factor::ALL {
        let is_selected = factor == selected;
        let value = app.estimator.value(factor);
        let marker = if is_selected { "▸ " } else { "  " };
        let value_text = factor.format_value(value);
        let label_len = marker.chars().count() + factor.label().len();
        let padding = width.saturating_sub(label_len + value_text.len());

        let label_style = if is_selected {
            theme.row_selected
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(factor.label(), label_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(value_text, Style::default().bold()),
        ]));

        let ratio = slider_ratio(factor, value);
        let fill = if is_selected {
            theme.slider_selected
        } else {
            theme.slider_filled
        };
        let mut bar = vec![Span::raw("  ")];
        bar.extend(fill_bar(ratio, width.saturating_sub(2), fill, theme.bar_empty));
        lines.push(Line::from(bar));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_score_card(frame: &mut Frame, area: Rect, app: &App, result: &ScoreResult) {
    let theme = &app.theme;
    let block = Block::bordered()
        .title(" Your Estimated Score ")
        .border_style(Style::default().fg(theme.panel_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let cue_color = theme.cue_color(result.cue());
    let marker = if result.band.is_favorable() {
        "▲ on track"
    } else {
        "! needs attention"
    };

    let score_line = Line::from(vec![
        Span::styled(result.score.to_string(), Style::default().fg(cue_color).bold()),
        Span::raw("  "),
        Span::styled(result.band.label(), Style::default().fg(cue_color).bold()),
        Span::raw("  "),
        Span::styled(marker, Style::default().fg(theme.muted)),
    ]);

    // Range indicator: "300 ████░░░░ 850"
    let min_label = SCORE_MIN.to_string();
    let max_label = SCORE_MAX.to_string();
    let bar_width = width.saturating_sub(min_label.len() + max_label.len() + 2);
    let mut range_spans = vec![Span::styled(format!("{} ", min_label), Style::default().fg(theme.muted))];
    range_spans.extend(fill_bar(result.fill_fraction(), bar_width, cue_color, theme.bar_empty));
    range_spans.push(Span::styled(format!(" {}", max_label), Style::default().fg(theme.muted)));

    let band_labels: Vec<&str> = Band::ALL.iter().map(|b| b.label()).collect();
    let ticks = spread_labels(&band_labels, width);

    let lines = vec![
        score_line,
        Line::from(""),
        Line::from(range_spans),
        Line::from(Span::styled(ticks, Style::default().fg(theme.muted))),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_recommendations(frame: &mut Frame, area: Rect, app: &App, result: &ScoreResult) {
    let theme = &app.theme;
    let block = Block::bordered()
        .title(" Recommendations ")
        .border_style(Style::default().fg(theme.panel_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        "Personalized suggestions",
        Style::default().fg(theme.muted),
    ))];
    lines.extend(result.advice.iter().enumerate().map(|(idx, advice)| {
        Line::from(vec![
            Span::styled(format!("{}. ", idx + 1), Style::default().fg(theme.advice_index).bold()),
            Span::raw(*advice),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.contains("already at its") {
            theme.flash_error
        } else {
            theme.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints = [
            ("j/k", ":factor "),
            ("h/l", ":adjust "),
            ("H/L", ":min/max "),
            ("r", ":reset "),
            ("b", ":breakdown "),
            ("?", ":help "),
            ("q", ":quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

fn slider_ratio(factor: Factor, value: u8) -> f64 {
    let span = f64::from(factor.max() - factor.min());
    if span > 0.0 {
        f64::from(value.saturating_sub(factor.min())) / span
    } else {
        0.0
    }
}

fn fill_bar(ratio: f64, width: usize, filled_color: Color, empty_color: Color) -> Vec<Span<'static>> {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(filled_color)));
    }
    if empty > 0 {
        spans.push(Span::styled("░".repeat(empty), Style::default().fg(empty_color)));
    }
    spans
}

/// Spread labels across `width` with the first flush left and the last flush right.
fn spread_labels(labels: &[&str], width: usize) -> String {
    let total: usize = labels.iter().map(|l| l.len()).sum();
    let gaps = labels.len().saturating_sub(1).max(1);
    let gap = width.saturating_sub(total) / gaps;
    labels.join(&" ".repeat(gap.max(1)))
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, theme: &ThemeColors) {
    let popup_area = centered_rect_fixed(50, 14, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", theme.popup_title))
        .border_style(Style::default().fg(theme.popup_border))
        .style(Style::default().bg(theme.popup_bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(theme.status_key_color).bold();
    let entries = [
        ("j / Down      ", "Next factor"),
        ("k / Up        ", "Previous factor"),
        ("l / Right     ", "Increase selected factor"),
        ("h / Left      ", "Decrease selected factor"),
        ("L / End       ", "Jump to maximum"),
        ("H / Home      ", "Jump to minimum"),
        ("r             ", "Reset to starting values"),
        ("b             ", "Show score breakdown"),
        ("?             ", "Show/hide this help"),
        ("q / Esc / ^c  ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

/// Render the per-factor score breakdown popup
fn render_breakdown_popup(frame: &mut Frame, theme: &ThemeColors, result: &ScoreResult) {
    let popup_area = centered_rect_fixed(56, 13, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Score Breakdown ", theme.popup_title))
        .border_style(Style::default().fg(theme.popup_border))
        .style(Style::default().bg(theme.popup_bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let breakdown = &result.breakdown;
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{:<20}", "Base score"), Style::default().bold()),
        Span::raw(format!("{:>8.1}", breakdown.base_score)),
    ])];

    for contribution in &breakdown.factors {
        let factor = contribution.factor;
        lines.push(Line::from(vec![
            Span::raw(format!("{:<20}", factor.name())),
            Span::styled(
                format!("{:>+8.1}", contribution.weight),
                Style::default().fg(theme.slider_filled),
            ),
            Span::styled(
                format!(
                    "  {:>8} of {:.0}",
                    factor.format_value(contribution.value),
                    factor.max_weight()
                ),
                Style::default().fg(theme.muted),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<20}", "Raw total"), Style::default().bold()),
        Span::raw(format!("{:>8.1}", breakdown.raw_total)),
    ]));

    let score_note = if breakdown.clamped {
        format!(
            "{} (rounded {:.0}, capped to {}..={})",
            result.score,
            breakdown.raw_total.round(),
            SCORE_MIN,
            SCORE_MAX
        )
    } else {
        result.score.to_string()
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{:<20}", "Score"), Style::default().bold()),
        Span::styled(score_note, Style::default().fg(theme.cue_color(result.cue()))),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "b / Esc to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::Estimator;
    use crate::scoring::ScoreInputs;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        render_rows(app, width, height).join("\n")
    }

    /// First row inside the score card, which holds the score and band.
    fn score_card_headline(app: &App) -> String {
        let rows = render_rows(app, 100, 30);
        let (y, col) = rows
            .iter()
            .enumerate()
            .find_map(|(y, row)| {
                row.find("Your Estimated Score")
                    .map(|byte| (y, row[..byte].chars().count()))
            })
            .expect("score card rendered");
        rows[y + 1]
            .chars()
            .skip(col.saturating_sub(2))
            .collect::<String>()
            .trim_start_matches(|c| c == '│' || c == ' ')
            .to_string()
    }

    fn app_with(inputs: ScoreInputs) -> App {
        App::new(Estimator::new(inputs), ThemeColors::dark(), 250)
    }

    #[test]
    fn test_default_render() {
        let text = render(&app_with(ScoreInputs::default()), 100, 30);
        assert!(text.contains("Credit Score Calculator"));
        assert!(text.contains("Payment History (35%)"));
        assert!(text.contains("95%"));
        assert!(text.contains("7 yrs"));
        assert!(text.contains("1. Great job! Maintain current habits"));
    }

    #[test]
    fn test_score_card_shows_current_score_and_band() {
        let headline = score_card_headline(&app_with(ScoreInputs::default()));
        assert!(headline.starts_with("850  Excellent  ▲ on track"), "{headline}");

        let poor = app_with(ScoreInputs::new(50, 100, 0, 1).unwrap());
        let headline = score_card_headline(&poor);
        assert!(headline.starts_with("495  Poor  ! needs attention"), "{headline}");

        // (60, 70, 5, 2): 300 + 210 + 90 + 50 + 40 = 690
        let good = app_with(ScoreInputs::new(60, 70, 5, 2).unwrap());
        assert!(score_card_headline(&good).starts_with("690  Good"));
    }

    #[test]
    fn test_poor_render_lists_all_advice() {
        let text = render(&app_with(ScoreInputs::new(50, 100, 0, 1).unwrap()), 100, 30);
        assert!(text.contains("needs attention"));
        assert!(text.contains("1. Improve payment consistency"));
        assert!(text.contains("4. Diversify credit types"));
    }

    #[test]
    fn test_render_tracks_latest_input() {
        let mut app = app_with(ScoreInputs::new(50, 100, 0, 1).unwrap());
        app.estimator.set(Factor::CreditMix, 5).unwrap();
        // 300 + 175 + 0 + 0 + 100
        assert!(score_card_headline(&app).starts_with("575  Poor"));
    }

    #[test]
    fn test_too_small_terminal() {
        let text = render(&app_with(ScoreInputs::default()), 40, 10);
        assert!(text.contains("Terminal too small"));
        assert!(!text.contains("Credit Factors"));
    }

    #[test]
    fn test_minimum_size_renders_layout() {
        let text = render(&app_with(ScoreInputs::default()), MIN_WIDTH, MIN_HEIGHT);
        assert!(text.contains("Credit Factors"));
        assert!(text.contains("Recommendations"));
    }

    #[test]
    fn test_breakdown_popup() {
        let mut app = app_with(ScoreInputs::default());
        app.show_score_breakdown();
        let text = render(&app, 100, 30);
        assert!(text.contains("Score Breakdown"));
        assert!(text.contains("+332.5"));
        assert!(text.contains("972.5"));
        assert!(text.contains("capped"));
    }

    #[test]
    fn test_help_popup() {
        let mut app = app_with(ScoreInputs::default());
        app.show_help();
        let text = render(&app, 100, 30);
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Reset to starting values"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut app = app_with(ScoreInputs::default());
        app.show_flash("Reset to starting values".to_string());
        let text = render(&app, 100, 30);
        assert!(text.contains("Reset to starting values"));
        assert!(!text.contains(":breakdown"));
    }

    #[test]
    fn test_fill_bar_widths() {
        let width = |spans: &[Span]| spans.iter().map(|s| s.content.chars().count()).sum::<usize>();
        assert_eq!(width(&fill_bar(0.0, 10, Color::Green, Color::Gray)), 10);
        assert_eq!(width(&fill_bar(1.0, 10, Color::Green, Color::Gray)), 10);
        let half = fill_bar(0.5, 10, Color::Green, Color::Gray);
        assert_eq!(half[0].content, "█████");
    }

    #[test]
    fn test_slider_ratio_bounds() {
        assert_eq!(slider_ratio(Factor::PaymentHistory, 50), 0.0);
        assert_eq!(slider_ratio(Factor::PaymentHistory, 100), 1.0);
        assert_eq!(slider_ratio(Factor::CreditMix, 3), 0.5);
    }

    #[test]
    fn test_spread_labels() {
        let spread = spread_labels(&["Poor", "Fair", "Good", "Excellent"], 30);
        assert!(spread.starts_with("Poor"));
        assert!(spread.ends_with("Excellent"));
        assert!(spread.len() <= 30);
    }
}
