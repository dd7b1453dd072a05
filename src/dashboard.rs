//! Dashboard View Model
//!
//! Pure mapping from fetched statistics to cards and chart geometry.

use crate::models::{StagePercents, StatisticsSnapshot, TimeseriesPoint};

pub const CARD_CAPTION: &str = "Last 7 days";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Book,
    Cross,
    Loader,
    DoubleCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    /// `None` while the statistics are missing
    pub value: Option<u64>,
    pub color: &'static str,
    pub icon: CardIcon,
}

impl SummaryCard {
    /// Blank when there is no value yet
    pub fn value_text(&self) -> String {
        self.value.map(|v| v.to_string()).unwrap_or_default()
    }
}

const APPLICATIONS_COLOR: &str = "#8055F9";
const REJECTIONS_COLOR: &str = "#FC678D";
const PENDINGS_COLOR: &str = "#FF7F43";
const ACCEPTANCES_COLOR: &str = "#2059FD";

/// The four headline cards, always in the same order
pub fn summary_cards(stats: Option<&StatisticsSnapshot>) -> [SummaryCard; 4] {
    [
        SummaryCard {
            title: "Applications",
            value: stats.map(|s| s.total_applications),
            color: APPLICATIONS_COLOR,
            icon: CardIcon::Book,
        },
        SummaryCard {
            title: "Rejections",
            value: stats.map(|s| s.rejected_applications),
            color: REJECTIONS_COLOR,
            icon: CardIcon::Cross,
        },
        SummaryCard {
            title: "Pendings",
            value: stats.map(|s| s.pending_applications),
            color: PENDINGS_COLOR,
            icon: CardIcon::Loader,
        },
        SummaryCard {
            title: "Acceptances",
            value: stats.map(|s| s.accepted_applications),
            color: ACCEPTANCES_COLOR,
            icon: CardIcon::DoubleCheck,
        },
    ]
}

// ========================
// Stage pie
// ========================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieEntry {
    pub label: &'static str,
    pub value: Option<f64>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub color: &'static str,
    pub fraction: f64,
    /// SVG path data
    pub path: String,
}

/// Stage percentages in fixed label order
pub fn stage_series(percents: Option<&StagePercents>) -> [PieEntry; 5] {
    [
        PieEntry {
            label: "Applied",
            value: percents.map(|p| p.applied_stage),
            color: "rgba(63, 81, 181, 0.5)",
        },
        PieEntry {
            label: "Assessment",
            value: percents.map(|p| p.assessment_stage),
            color: "rgba(77, 182, 172, 0.5)",
        },
        PieEntry {
            label: "Interview",
            value: percents.map(|p| p.interview_stage),
            color: "rgba(66, 133, 244, 0.5)",
        },
        PieEntry {
            label: "Offer",
            value: percents.map(|p| p.offer_stage),
            color: "rgba(156, 39, 176, 0.5)",
        },
        PieEntry {
            label: "Phone Screen",
            value: percents.map(|p| p.phonescreen_stage),
            color: "rgba(244, 67, 54, 0.5)",
        },
    ]
}

/// Slices proportional to each entry's share of the total.
///
/// Starts at 12 o'clock and runs clockwise. Missing, negative or NaN values
/// count as zero and get no slice.
pub fn pie_slices(entries: &[PieEntry], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let value_of = |e: &PieEntry| e.value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(0.0);
    let total: f64 = entries.iter().map(value_of).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -std::f64::consts::FRAC_PI_2;
    let mut slices = Vec::new();
    for entry in entries {
        let value = value_of(entry);
        if value == 0.0 {
            continue;
        }
        let fraction = value / total;
        let path = if fraction >= 1.0 - 1e-9 {
            // an arc back to its own start point draws nothing
            format!(
                "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
                cx,
                cy - r,
                cx,
                cy + r,
                cx,
                cy - r,
                r = r
            )
        } else {
            let sweep = fraction * std::f64::consts::TAU;
            let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = u8::from(fraction > 0.5);
            format!(
                "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {} 1 {:.2} {:.2} Z",
                cx,
                cy,
                x1,
                y1,
                large_arc,
                x2,
                y2,
                r = r
            )
        };
        angle += fraction * std::f64::consts::TAU;
        slices.push(PieSlice {
            label: entry.label,
            color: entry.color,
            fraction,
            path,
        });
    }
    slices
}

// ========================
// Timeseries line chart
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChart {
    /// X axis labels, one per point
    pub labels: Vec<String>,
    pub series: Vec<LineSeries>,
}

impl LineChart {
    /// Largest value across series, never below 1 so flat charts still scale
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(1.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One line per metric, colored like its summary card
pub fn timeseries_chart(points: &[TimeseriesPoint]) -> LineChart {
    let series_of = |label, color, pick: fn(&TimeseriesPoint) -> f64| LineSeries {
        label,
        color,
        values: points.iter().map(pick).collect(),
    };
    LineChart {
        labels: points.iter().map(|p| p.date.clone()).collect(),
        series: vec![
            series_of("Applications", APPLICATIONS_COLOR, |p| p.applications),
            series_of("Acceptances", ACCEPTANCES_COLOR, |p| p.accepted),
            series_of("Pendings", PENDINGS_COLOR, |p| p.pending),
            series_of("Rejections", REJECTIONS_COLOR, |p| p.rejected),
        ],
    }
}

/// X position of point `index` out of `count` across `width`
pub fn x_position(index: usize, count: usize, width: f64) -> f64 {
    if count <= 1 {
        width / 2.0
    } else {
        index as f64 * width / (count - 1) as f64
    }
}

/// SVG `points` attribute for a series scaled into `width` x `height`,
/// with the y axis pointing up
pub fn polyline_points(values: &[f64], max: f64, width: f64, height: f64) -> String {
    let max = if max > 0.0 { max } else { 1.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let v = if v.is_finite() { v.clamp(0.0, max) } else { 0.0 };
            let x = x_position(i, values.len(), width);
            let y = height - v / max * height;
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
