use crate::core::{Language, Phase, ValuationResponse, ViewState};
use crate::domain::model::Direction;
use crate::ui::chart::{chart_points, render_chart, FULL_MARK};
use crate::ui::format::{
    align, center, display_width, format_sale, format_score, format_usd, isolate_ltr, wrap,
};
use crate::ui::i18n::{translations, Translations};
use chrono::Datelike;

/// Line buffer that applies the layout direction to everything pushed into it.
struct Frame {
    lines: Vec<String>,
    direction: Direction,
    width: usize,
}

impl Frame {
    fn new(direction: Direction, width: usize) -> Self {
        Self {
            lines: Vec::new(),
            direction,
            width,
        }
    }

    fn push(&mut self, line: impl AsRef<str>) {
        self.lines.push(align(line.as_ref(), self.direction, self.width));
    }

    fn push_raw(&mut self, line: String) {
        self.lines.push(line);
    }

    fn centered(&mut self, line: impl AsRef<str>) {
        self.lines.push(center(line.as_ref(), self.width));
    }

    fn paragraph(&mut self, text: &str, indent: usize) {
        let pad = " ".repeat(indent);
        for line in wrap(text, self.width.saturating_sub(indent).max(10)) {
            match self.direction {
                Direction::Ltr => self.push(format!("{}{}", pad, line)),
                Direction::Rtl => self.push(format!("{}{}", line, pad)),
            }
        }
    }

    fn heading(&mut self, text: &str) {
        self.blank();
        self.push(text);
        self.push("─".repeat(display_width(text)));
    }

    fn rule(&mut self) {
        self.lines.push("═".repeat(self.width));
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

fn render_header_into(frame: &mut Frame, language: Language, t: &Translations) {
    let selector: Vec<String> = Language::ALL
        .iter()
        .map(|l| {
            if *l == language {
                format!("[{}]", l.native_name())
            } else {
                l.native_name().to_string()
            }
        })
        .collect();
    frame.rule();
    frame.push(format!("{}    {}: {}", t.title, t.language_label, selector.join(" | ")));
    frame.rule();
}

/// Score card: title with `NN/100`, then the model's explanation.
fn render_score_card(frame: &mut Frame, title: &str, score: u8, description: &str) {
    frame.blank();
    frame.push(format!("{}: {}", title, format_score(score)));
    if !description.trim().is_empty() {
        frame.paragraph(description, 2);
    }
}

fn render_result_into(frame: &mut Frame, data: &ValuationResponse, domain: &str, t: &Translations) {
    let direction = frame.direction;

    frame.blank();
    frame.centered(t.estimated_value);
    frame.centered(format_usd(data.estimated_value));
    frame.centered(format!("\"{}\"", isolate_ltr(domain, direction)));
    frame.blank();
    frame.paragraph(&data.summary, 0);

    frame.heading(t.breakdown);
    let analysis = &data.detailed_analysis;
    render_score_card(frame, t.brandability, data.brandability_score, &analysis.brandability);
    render_score_card(frame, t.keywords, data.keyword_score, &analysis.keywords);
    render_score_card(frame, t.extensions, data.extension_score, &analysis.extensions);
    render_score_card(frame, t.age, data.age_score, &analysis.age);

    frame.heading(t.market_trends);
    frame.paragraph(&analysis.market_trends, 0);

    frame.heading(t.why_this_value);
    frame.push(format!("█ {} / {}", t.score, FULL_MARK));
    for line in render_chart(&chart_points(data, t), direction, frame.width) {
        frame.push_raw(line);
    }

    frame.heading(t.comparable_sales);
    for sale in &data.comparable_sales {
        frame.push(format!("  {}", format_sale(sale, direction)));
    }
    frame.blank();
    frame.paragraph(&format!("ⓘ {}", t.sales_disclaimer), 0);
}

fn render_empty_state_into(frame: &mut Frame, t: &Translations) {
    for (idx, (title, body)) in t.steps.iter().enumerate() {
        frame.blank();
        frame.push(format!("({}) {}", idx + 1, title));
        frame.paragraph(body, 4);
    }
}

/// Full screen for the given state, with the footer year supplied by the caller.
pub fn render_view_at(state: &ViewState, width: usize, year: i32) -> String {
    let language = state.language;
    let t = translations(language);
    let direction = language.direction();
    let mut frame = Frame::new(direction, width);

    render_header_into(&mut frame, language, t);

    let phase = state.phase();
    if !matches!(phase, Phase::Success(_)) {
        frame.blank();
        frame.centered(t.title);
        frame.centered(t.subtitle);
    }

    frame.blank();
    match phase {
        Phase::Loading => frame.push(format!(
            "> {}    ⏳ {}",
            isolate_ltr(&state.searched_domain, direction),
            t.analyzing
        )),
        _ => frame.push(format!("> {}  [{}]", t.placeholder, t.analyze_btn)),
    }

    match phase {
        Phase::Idle => render_empty_state_into(&mut frame, t),
        Phase::Loading => {}
        Phase::Error(message) => {
            frame.blank();
            frame.push(format!("⚠ {}", message));
        }
        Phase::Success(data) => {
            render_result_into(&mut frame, data, &state.searched_domain, t);
            frame.blank();
            frame.push(format!("↻ {}", t.try_again));
        }
    }

    frame.blank();
    frame.rule();
    frame.centered(format!("© {} {}", year, t.footer));
    frame.finish()
}

pub fn render_view(state: &ViewState, width: usize) -> String {
    render_view_at(state, width, chrono::Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComparableSale, DetailedAnalysis};
    use crate::ui::i18n::{ARABIC, ENGLISH};

    fn example_state(language: Language) -> ViewState {
        ViewState {
            language,
            searched_domain: "example.com".to_string(),
            request_seq: 1,
            result: Some(ValuationResponse {
                currency: Some("USD".to_string()),
                estimated_value: 50000.0,
                brandability_score: 80,
                keyword_score: 60,
                extension_score: 90,
                age_score: 70,
                comparable_sales: vec![ComparableSale {
                    domain: "sample.com".to_string(),
                    price: 12000.0,
                    year: "2022".to_string(),
                }],
                summary: "A short, memorable dot-com.".to_string(),
                detailed_analysis: DetailedAnalysis {
                    brandability: "Easy to say.".to_string(),
                    keywords: "Generic keyword.".to_string(),
                    extensions: ".com is the premium TLD.".to_string(),
                    age: "Likely registered long ago.".to_string(),
                    market_trends: "Steady demand.".to_string(),
                },
            }),
            ..ViewState::default()
        }
    }

    #[test]
    fn test_idle_view_shows_hero_and_steps() {
        let out = render_view_at(&ViewState::default(), 72, 2026);
        assert!(out.contains(ENGLISH.subtitle));
        assert!(out.contains(ENGLISH.steps[2].0));
        assert!(out.contains("© 2026"));
        assert!(out.contains("[English]"));
    }

    #[test]
    fn test_loading_view_shows_indicator() {
        let state = ViewState {
            loading: true,
            searched_domain: "example.com".to_string(),
            ..ViewState::default()
        };
        let out = render_view_at(&state, 72, 2026);
        assert!(out.contains(ENGLISH.analyzing));
        assert!(!out.contains(ENGLISH.steps[0].0));
    }

    #[test]
    fn test_success_view_hides_hero() {
        let out = render_view_at(&example_state(Language::English), 72, 2026);
        assert!(!out.contains(ENGLISH.subtitle));
        assert!(out.contains("Steady demand."));
        assert!(out.contains(ENGLISH.try_again));
        assert!(out.contains(ENGLISH.sales_disclaimer));
    }

    #[test]
    fn test_chart_has_series_legend() {
        let out = render_view_at(&example_state(Language::English), 72, 2026);
        assert!(out.contains(&format!("█ {} / 100", ENGLISH.score)));

        let out = render_view_at(&example_state(Language::Arabic), 72, 2026);
        assert!(out.contains(&format!("█ {} / 100", ARABIC.score)));
    }

    #[test]
    fn test_arabic_view_is_right_aligned() {
        let out = render_view_at(&example_state(Language::Arabic), 72, 2026);
        assert!(out.contains(ARABIC.estimated_value));
        assert!(out.contains("[العربية]"));
        let breakdown_line = out.lines().find(|l| l.contains(ARABIC.breakdown)).unwrap();
        assert!(breakdown_line.starts_with('\u{200F}'));
        assert!(out.contains("\u{2066}sample.com\u{2069} — $12,000 (2022)"));
    }
}
