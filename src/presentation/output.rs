//! Output Rendering
//!
//! Text renderers return strings so commands decide where they go and tests
//! can snapshot them. JSON renderers return `serde_json::Value`.

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::EntityStore;
use crate::domain::services::QueryAnswer;
use crate::domain::value_objects::{ChartPoint, ChartType};

const UNIT: &str = "tCO2e";

/// Widest bar, in cells
const BAR_WIDTH: usize = 24;

/// Glyphs for output rendering
struct Glyphs {
    bar: &'static str,
    arrow: &'static str,
    prompt: &'static str,
    dot: &'static str,
    spark: [char; 8],
}

impl Glyphs {
    fn unicode() -> Self {
        Self {
            bar: "█",
            arrow: "→",
            prompt: "›",
            dot: "·",
            spark: ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'],
        }
    }

    fn ascii() -> Self {
        Self {
            bar: "#",
            arrow: "->",
            prompt: ">",
            dot: "-",
            spark: ['_', '.', ',', '-', '~', '=', '*', '#'],
        }
    }
}

/// Text renderer for answers and summaries
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn glyphs(&self) -> Glyphs {
        if self.unicode {
            Glyphs::unicode()
        } else {
            Glyphs::ascii()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Sweepy's reply: summary, optional chart, link
    pub fn answer(&self, answer: &QueryAnswer) -> String {
        let glyphs = self.glyphs();
        let mut out = format!(
            "{} {}\n",
            self.paint(&format!("Sweepy {}", glyphs.prompt), Color::Cyan),
            answer.summary
        );

        if let Some(chart_type) = answer.chart_type {
            let chart = self.chart(chart_type, &answer.chart_data);
            if !chart.is_empty() {
                out.push('\n');
                out.push_str(&chart);
            }
        }

        out.push('\n');
        out.push_str(&format!(
            "  {} {} ({})\n",
            glyphs.arrow,
            answer.link_text,
            self.paint(&answer.link_url, Color::DarkGrey)
        ));
        if self.verbose > 0 {
            out.push_str(&format!("  {} intent: {}\n", glyphs.dot, answer.intent));
        }
        out
    }

    /// Draw chart data as text
    pub fn chart(&self, chart_type: ChartType, points: &[ChartPoint]) -> String {
        match chart_type {
            ChartType::Bar => self.bar_chart(points, false),
            ChartType::Donut => self.bar_chart(points, true),
            ChartType::Sparkline => self.sparkline(points),
        }
    }

    /// One row per point; bars scale to the largest positive value
    pub fn bar_chart(&self, points: &[ChartPoint], with_share: bool) -> String {
        let glyphs = self.glyphs();
        let label_width = points
            .iter()
            .map(|p| p.name.width())
            .max()
            .unwrap_or(0);
        let max = points
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite() && *v > 0.0)
            .fold(0.0_f64, f64::max);
        let total: f64 = points
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite() && *v > 0.0)
            .sum();

        let mut out = String::new();
        for point in points {
            let cells = bar_cells(point.value, max);
            let bar = self.paint(&glyphs.bar.repeat(cells), Color::Green);
            let gap = if cells > 0 { " " } else { "" };
            let value = if with_share && total > 0.0 && point.value.is_finite() {
                format!("{:.1} ({:.0}%)", point.value, point.value / total * 100.0)
            } else {
                format!("{:.1}", point.value)
            };
            out.push_str(&format!(
                "  {}  {}{}{}\n",
                pad(&point.name, label_width),
                bar,
                gap,
                value
            ));
        }
        out
    }

    /// A single line of levels, oldest first
    pub fn sparkline(&self, points: &[ChartPoint]) -> String {
        let finite: Vec<f64> = points
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .collect();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return String::new();
        };
        if finite.is_empty() {
            return String::new();
        }
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let levels = self.glyphs().spark;

        let line: String = points
            .iter()
            .map(|p| {
                if !p.value.is_finite() {
                    return ' ';
                }
                let level = if max > min {
                    ((p.value - min) / (max - min) * 7.0).round() as usize
                } else {
                    3
                };
                levels[level.min(7)]
            })
            .collect();

        format!(
            "  {}  {} {} {}\n",
            self.paint(&line, Color::Green),
            first.name,
            self.glyphs().arrow,
            last.name
        )
    }

    /// Tracks, targets and initiatives with their derived values
    pub fn summary(&self, store: &EntityStore) -> String {
        let glyphs = self.glyphs();
        let mut out = String::new();

        out.push_str(&self.heading("Tracks"));
        let labels: Vec<String> = store.tracks().iter().map(|t| t.label()).collect();
        let width = labels.iter().map(|l| l.width()).max().unwrap_or(0);
        for (track, label) in store.tracks().iter().zip(&labels) {
            out.push_str(&format!(
                "  {}  {:>10.1} {UNIT}\n",
                pad(label, width),
                track.total_emissions
            ));
        }
        if store.tracks().is_empty() {
            out.push_str("  (none)\n");
        }

        out.push('\n');
        out.push_str(&self.heading("Targets"));
        let width = store
            .targets()
            .iter()
            .map(|t| t.name.width())
            .max()
            .unwrap_or(0);
        for target in store.targets() {
            out.push_str(&format!(
                "  {}  {:.1} {} {:.1} {UNIT} (-{}%, {}, due {})\n",
                pad(&target.name, width),
                target.baseline_value,
                glyphs.arrow,
                target.target_value,
                target.target_percentage,
                target.status,
                target.target_date
            ));
        }
        if store.targets().is_empty() {
            out.push_str("  (none)\n");
        }

        out.push('\n');
        out.push_str(&self.heading("Initiatives"));
        let width = store
            .initiatives()
            .iter()
            .map(|i| i.name.width())
            .max()
            .unwrap_or(0);
        for initiative in store.initiatives() {
            let linked = initiative.target_ids.len();
            out.push_str(&format!(
                "  {}  {:.1} {UNIT} {} {} target{} {} spend {:.0}\n",
                pad(&initiative.name, width),
                initiative.absolute,
                glyphs.dot,
                linked,
                if linked == 1 { "" } else { "s" },
                glyphs.dot,
                initiative.spend
            ));
        }
        if store.initiatives().is_empty() {
            out.push_str("  (none)\n");
        }

        out
    }

    fn heading(&self, title: &str) -> String {
        format!("{}\n", self.paint(title, Color::Cyan))
    }
}

fn bar_cells(value: f64, max: f64) -> usize {
    if !(value.is_finite() && value > 0.0 && max > 0.0) {
        return 0;
    }
    ((value / max * BAR_WIDTH as f64).round() as usize).clamp(1, BAR_WIDTH)
}

/// Left-align `text` to `width` terminal columns
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// JSON form of an answer
pub fn answer_json(answer: &QueryAnswer) -> serde_json::Value {
    serde_json::json!({
        "event": "answer",
        "intent": answer.intent,
        "summary": answer.summary,
        "chart_type": answer.chart_type,
        "chart_data": answer.chart_data,
        "link_text": answer.link_text,
        "link_url": answer.link_url,
    })
}

/// JSON form of the store summary
pub fn summary_json(store: &EntityStore) -> serde_json::Value {
    serde_json::json!({
        "event": "summary",
        "tracks": store.tracks().iter().map(|t| serde_json::json!({
            "id": t.id,
            "name": t.name,
            "total_emissions": t.total_emissions,
        })).collect::<Vec<_>>(),
        "targets": store.targets().iter().map(|t| serde_json::json!({
            "id": t.id,
            "name": t.name,
            "baseline_value": t.baseline_value,
            "target_percentage": t.target_percentage,
            "target_value": t.target_value,
        })).collect::<Vec<_>>(),
        "initiatives": store.initiatives().iter().map(|i| serde_json::json!({
            "id": i.id,
            "name": i.name,
            "target_ids": i.target_ids,
            "absolute": i.absolute,
        })).collect::<Vec<_>>(),
    })
}
