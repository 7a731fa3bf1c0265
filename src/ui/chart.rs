use crate::domain::model::{Direction, ValuationResponse};
use crate::ui::format::{align, display_width};
use crate::ui::i18n::Translations;

pub const FULL_MARK: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub subject: &'static str,
    pub value: u8,
}

/// The five radar axes: four sub-scores plus the derived market-trend value.
pub fn chart_points(data: &ValuationResponse, t: &Translations) -> Vec<ChartPoint> {
    vec![
        ChartPoint { subject: t.brandability, value: data.brandability_score },
        ChartPoint { subject: t.keywords, value: data.keyword_score },
        ChartPoint { subject: t.extensions, value: data.extension_score },
        ChartPoint { subject: t.age, value: data.age_score },
        ChartPoint { subject: t.market_trends, value: data.market_trend_score() },
    ]
}

/// Text rendering of the radar: one bar per axis, scaled to `FULL_MARK`.
pub fn render_chart(points: &[ChartPoint], direction: Direction, width: usize) -> Vec<String> {
    let label_width = points
        .iter()
        .map(|p| display_width(p.subject))
        .max()
        .unwrap_or(0);
    let bar_width = width.saturating_sub(label_width + 6).clamp(10, 40);

    points
        .iter()
        .map(|point| {
            let value = point.value.min(FULL_MARK);
            let filled = usize::from(value) * bar_width / usize::from(FULL_MARK);
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(bar_width - filled));
            let pad = " ".repeat(label_width - display_width(point.subject));
            let line = match direction {
                Direction::Ltr => format!("{}{} {} {:>3}", point.subject, pad, bar, value),
                Direction::Rtl => format!("{:>3} {} {}{}", value, bar, pad, point.subject),
            };
            align(&line, direction, width)
        })
        .collect()
}
