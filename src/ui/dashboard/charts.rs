//! Chart configurations and their rendering
//!
//! Panels describe their charts as [`ChartConfig`] values built from the demo
//! data; this module turns those into ratatui widgets. Keeping the two apart
//! lets the panel contents be checked without a terminal.

use super::utils::format_compact_number;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
    Padding, Paragraph,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    /// Proportions of a whole, drawn as percentage bars.
    Share,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    /// Non-finite values are gaps: line charts break there, bars show 0.
    pub values: Vec<f64>,
    pub color: Color,
}

impl Series {
    pub fn new(name: impl Into<String>, values: &[f64], color: Color) -> Self {
        Self {
            name: name.into(),
            values: values.to_vec(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub kind: ChartKind,
    /// One label per data point (Line/Bar) or per slice (Share).
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartConfig {
    pub fn new(
        title: impl Into<String>,
        kind: ChartKind,
        labels: Vec<String>,
        series: Vec<Series>,
    ) -> Self {
        Self {
            title: title.into(),
            kind,
            labels,
            series,
        }
    }
}

/// Colors cycled through for share slices.
pub const SHARE_COLORS: [Color; 4] = [Color::Cyan, Color::Magenta, Color::Yellow, Color::Green];

/// Y-axis bounds covering every series, with headroom above the maximum.
pub fn value_bounds(series: &[Series]) -> [f64; 2] {
    let (min, max) = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let lower = if min >= 0.0 { 0.0 } else { min * 1.1 };
    let upper = if max > 0.0 { max * 1.1 } else { 1.0 };
    [lower, upper]
}

/// Each value as a percentage of the total.
pub fn share_percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total * 100.0).collect()
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

pub fn render_chart(f: &mut Frame, area: Rect, config: &ChartConfig) {
    match config.kind {
        ChartKind::Line => render_line_chart(f, area, config),
        ChartKind::Bar => render_bar_chart(f, area, config),
        ChartKind::Share => render_share_chart(f, area, config),
    }
}

/// Split values into runs of consecutive finite points, keyed by index.
pub fn finite_runs(values: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (i, v) in values.iter().enumerate() {
        if v.is_finite() {
            current.push((i as f64, *v));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn render_line_chart(f: &mut Frame, area: Rect, config: &ChartConfig) {
    // One dataset per unbroken run so gaps are not bridged
    let runs: Vec<(&Series, Vec<Vec<(f64, f64)>>)> = config
        .series
        .iter()
        .map(|s| (s, finite_runs(&s.values)))
        .collect();

    let mut datasets: Vec<Dataset> = Vec::new();
    for (series, series_runs) in &runs {
        for (i, data) in series_runs.iter().enumerate() {
            let mut dataset = Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color))
                .data(data);
            // Only the first run carries the legend entry
            if i == 0 {
                dataset = dataset.name(series.name.clone());
            }
            datasets.push(dataset);
        }
    }

    let x_max = config
        .series
        .iter()
        .map(|s| s.values.len())
        .max()
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1) as f64;

    // First, middle and last labels keep the axis readable on narrow panels
    let x_labels: Vec<Span> = match config.labels.len() {
        0 => Vec::new(),
        1 => vec![Span::raw(config.labels[0].clone())],
        n => vec![
            Span::raw(config.labels[0].clone()),
            Span::raw(config.labels[n / 2].clone()),
            Span::raw(config.labels[n - 1].clone()),
        ],
    };

    let [y_min, y_max] = value_bounds(&config.series);
    let y_labels = vec![
        Span::raw(format_compact_number(y_min)),
        Span::raw(format_compact_number((y_min + y_max) / 2.0)),
        Span::raw(format_compact_number(y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(&config.title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn render_bar_chart(f: &mut Frame, area: Rect, config: &ChartConfig) {
    let groups: Vec<BarGroup> = config
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let bars: Vec<Bar> = config
                .series
                .iter()
                .map(|s| {
                    let value = s.values.get(i).copied().unwrap_or(0.0).max(0.0);
                    Bar::default()
                        .value(value.round() as u64)
                        .text_value(format_compact_number(value))
                        .style(Style::default().fg(s.color))
                        .value_style(Style::default().fg(Color::Black).bg(s.color))
                })
                .collect();
            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars)
        })
        .collect();

    let (bar_width, group_gap) = bar_layout(area.width, config.labels.len(), config.series.len());
    let mut chart = BarChart::default()
        .block(chart_block(&config.title))
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(group_gap);
    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

/// Bar width and group gap that fit `groups` groups of `bars` bars in `width` columns.
pub fn bar_layout(width: u16, groups: usize, bars: usize) -> (u16, u16) {
    let inner = width.saturating_sub(2) as usize;
    let per_group = inner / groups.max(1);
    let group_gap = if per_group > 3 { 1 } else { 0 };
    let bar_width = (per_group.saturating_sub(group_gap) / bars.max(1)).clamp(1, 5);
    (bar_width as u16, group_gap as u16)
}

fn render_share_chart(f: &mut Frame, area: Rect, config: &ChartConfig) {
    let values = config
        .series
        .first()
        .map(|s| s.values.as_slice())
        .unwrap_or_default();
    let percentages = share_percentages(values);

    let label_width = config.labels.iter().map(|l| l.len()).max().unwrap_or(0);
    // Borders, padding, label, percentage text
    let bar_room = area.width.saturating_sub(4 + label_width as u16 + 9) as f64;

    let lines: Vec<Line> = config
        .labels
        .iter()
        .zip(percentages.iter())
        .enumerate()
        .map(|(i, (label, pct))| {
            let color = SHARE_COLORS[i % SHARE_COLORS.len()];
            let filled = (bar_room * pct / 100.0).round() as usize;
            Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", label, width = label_width),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(
                    format!(" {:.1}%", pct),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(chart_block(&config.title).padding(Padding::horizontal(1)));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bounds_start_at_zero_for_positive_data() {
        let series = [Series::new("a", &[10.0, 50.0], Color::Red)];
        let [lo, hi] = value_bounds(&series);
        assert_eq!(lo, 0.0);
        assert!((hi - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_bounds_handle_negatives_and_empty() {
        let series = [Series::new("t", &[-5.0, 10.0], Color::Red)];
        let [lo, _] = value_bounds(&series);
        assert!(lo < -5.0);
        assert_eq!(value_bounds(&[]), [0.0, 1.0]);
    }

    #[test]
    fn test_bar_layout_fits_width() {
        // 30 daily bars in a 100 column panel
        let (width, gap) = bar_layout(100, 30, 1);
        assert!((width + gap) as usize * 30 <= 98);
        // Never collapses below one column
        assert_eq!(bar_layout(10, 30, 2), (1, 0));
        // Caps the width on roomy panels
        assert_eq!(bar_layout(200, 4, 1).0, 5);
    }

    #[test]
    fn test_finite_runs_break_at_gaps() {
        let runs = finite_runs(&[1.0, f64::NAN, 3.0, 4.0, f64::NAN]);
        assert_eq!(runs, vec![vec![(0.0, 1.0)], vec![(2.0, 3.0), (3.0, 4.0)]]);
        assert!(finite_runs(&[f64::NAN]).is_empty());
    }

    #[test]
    fn test_value_bounds_ignore_gaps() {
        let series = [Series::new("t", &[f64::NAN, 10.0], Color::Red)];
        let [lo, hi] = value_bounds(&series);
        assert_eq!(lo, 0.0);
        assert!((hi - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_share_percentages() {
        let pct = share_percentages(&[300.0, 200.0, 150.0, 100.0]);
        assert!((pct[0] - 40.0).abs() < 1e-9);
        assert!((pct.iter().sum::<f64>() - 100.0).abs() < 1e-9);
        assert_eq!(share_percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
    }
}
