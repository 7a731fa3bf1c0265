use crate::domain::model::{ComparableSale, Direction};
use unicode_width::UnicodeWidthStr;

const RLM: char = '\u{200F}';
const LRI: char = '\u{2066}';
const PDI: char = '\u{2069}';

/// Whole US dollars with thousands separators, e.g. `$50,000`.
pub fn format_usd(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn format_score(score: u8) -> String {
    format!("{}/100", score)
}

/// Domains stay left-to-right even inside right-to-left text.
pub fn isolate_ltr(text: &str, direction: Direction) -> String {
    match direction {
        Direction::Ltr => text.to_string(),
        Direction::Rtl => format!("{}{}{}", LRI, text, PDI),
    }
}

pub fn format_sale(sale: &ComparableSale, direction: Direction) -> String {
    let price = format_usd(sale.price);
    let domain = isolate_ltr(&sale.domain, direction);
    if sale.year.trim().is_empty() {
        format!("{} — {}", domain, price)
    } else {
        format!("{} — {} ({})", domain, price, sale.year)
    }
}

/// Terminal columns taken by `text`, ignoring the bidi marks added for layout.
pub fn display_width(text: &str) -> usize {
    if !text.contains([RLM, LRI, PDI]) {
        return text.width();
    }
    let visible: String = text.chars().filter(|c| !matches!(*c, RLM | LRI | PDI)).collect();
    visible.width()
}

/// Right-aligns a line for RTL layouts; LTR lines pass through.
pub fn align(line: &str, direction: Direction, width: usize) -> String {
    match direction {
        Direction::Ltr => line.to_string(),
        Direction::Rtl => {
            let pad = width.saturating_sub(display_width(line));
            format!("{}{}{}", RLM, " ".repeat(pad), line)
        }
    }
}

/// Centers a line within `width` columns.
pub fn center(line: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(line)) / 2;
    format!("{}{}", " ".repeat(pad), line)
}

/// Greedy word wrap on whitespace; long words are kept whole.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            display_width(word)
        } else {
            display_width(&current) + 1 + display_width(word)
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(50000.0), "$50,000");
        assert_eq!(format_usd(12000.0), "$12,000");
        assert_eq!(format_usd(999.0), "$999");
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(1234567.49), "$1,234,567");
        assert_eq!(format_usd(1499.5), "$1,500");
    }

    #[test]
    fn test_format_sale_ltr() {
        let sale = ComparableSale {
            domain: "sample.com".to_string(),
            price: 12000.0,
            year: "2022".to_string(),
        };
        assert_eq!(format_sale(&sale, Direction::Ltr), "sample.com — $12,000 (2022)");
    }

    #[test]
    fn test_format_sale_rtl_isolates_domain() {
        let sale = ComparableSale {
            domain: "sample.com".to_string(),
            price: 12000.0,
            year: String::new(),
        };
        let line = format_sale(&sale, Direction::Rtl);
        assert_eq!(line, "\u{2066}sample.com\u{2069} — $12,000");
    }

    #[test]
    fn test_align_rtl_pads_to_width() {
        let line = align("abc", Direction::Rtl, 10);
        assert_eq!(display_width(&line), 10);
        assert!(line.ends_with("abc"));
        assert_eq!(align("abc", Direction::Ltr, 10), "abc");
    }

    #[test]
    fn test_display_width_counts_columns() {
        assert_eq!(display_width("例子.com"), 8);
        assert_eq!(display_width("\u{2066}例子.com\u{2069}"), 8);
        assert_eq!(display_width("مَرْحَبًا"), 5);
        assert_eq!(display_width("⏳"), 2);
        assert_eq!(display_width("sample.com"), 10);
    }

    #[test]
    fn test_center_and_align_use_wide_columns() {
        assert_eq!(center("例子", 10), "   例子");
        let line = align("例子.com", Direction::Rtl, 12);
        assert_eq!(line, "\u{200F}    例子.com");
    }

    #[test]
    fn test_wrap() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        assert!(wrap("   ", 10).is_empty());
    }
}
