//! Plain-text rendering of a match result

use std::fmt::{Display, Write};

use crate::models::{DistributionEntry, MatchResult};

/// Column width, in terminal cells, of the distribution label column
const LABEL_COLUMNS: usize = 10;

/// Terminal cells taken by `s`; non-ASCII characters count as double width
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

/// Left-align `s` in a field `width` cells wide
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut padded = s.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(display_width(s))));
    padded
}

/// Render the top matches followed by both distributions
pub fn render(result: &MatchResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "相似度最高的 {} 条真实路径", result.top_matches.len());
    for entry in &result.top_matches {
        let record = &entry.record;
        let path = format!("{} → {}", record.industry, record.job_type);
        let _ = writeln!(
            out,
            "  {:02}  {}  背景：{} · {} · {}    匹配度 {}%",
            entry.rank,
            pad_to_width(&path, 20),
            record.education,
            record.major,
            record.interest,
            entry.match_percentage
        );
    }

    out.push('\n');
    render_distribution(&mut out, "行业分布", &result.industry_distribution);
    out.push('\n');
    render_distribution(&mut out, "岗位类型分布", &result.job_type_distribution);

    out
}

fn render_distribution<K: Display>(out: &mut String, title: &str, entries: &[DistributionEntry<K>]) {
    let window: usize = entries.iter().map(|e| e.count).sum();
    let _ = writeln!(out, "{} (Top {})", title, window);
    for entry in entries {
        let _ = writeln!(
            out,
            "  {}{:>3}%  ({})",
            pad_to_width(&entry.key.to_string(), LABEL_COLUMNS),
            entry.percentage,
            entry.count
        );
    }
}
