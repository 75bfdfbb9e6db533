//! Geometry for the analytics charts. Components only turn these values into SVG.

use std::f64::consts::PI;

use chrono::NaiveDate;

use crate::category::style_for_label;
use crate::models::{ordered_totals, CategoryTotals, TrendPoint};

pub const TREND_WIDTH: f64 = 600.0;
pub const TREND_HEIGHT: f64 = 240.0;

pub const DOUGHNUT_RADIUS: f64 = 80.0;
pub const DOUGHNUT_STROKE: f64 = 36.0;

/// Short month/day axis label, e.g. `Mar 5`. Unparseable dates pass through.
pub fn short_date_label(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendMark {
    pub label: String,
    pub amount: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendChart {
    pub marks: Vec<TrendMark>,
    pub max_amount: f64,
}

impl TrendChart {
    /// Plots the last `window` points with the y axis starting at zero.
    pub fn from_points(points: &[TrendPoint], window: usize) -> Self {
        let start = points.len().saturating_sub(window);
        let visible = &points[start..];
        let max_amount = visible.iter().map(|p| p.amount).fold(0.0, f64::max);
        let scale = if max_amount > 0.0 { max_amount } else { 1.0 };
        let step = if visible.len() > 1 {
            TREND_WIDTH / (visible.len() - 1) as f64
        } else {
            0.0
        };
        let marks = visible
            .iter()
            .enumerate()
            .map(|(i, p)| TrendMark {
                label: short_date_label(&p.date),
                amount: p.amount,
                x: if visible.len() > 1 {
                    i as f64 * step
                } else {
                    TREND_WIDTH / 2.0
                },
                y: TREND_HEIGHT - p.amount.max(0.0) / scale * TREND_HEIGHT,
            })
            .collect();
        Self { marks, max_amount }
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// `points` attribute of the SVG polyline.
    pub fn polyline(&self) -> String {
        self.marks
            .iter()
            .map(|m| format!("{:.1},{:.1}", m.x, m.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoughnutSlice {
    pub label: String,
    pub color: &'static str,
    pub amount: f64,
    pub share: f64,
    /// `stroke-dasharray` length of the arc.
    pub dash: f64,
    /// Distance along the circumference where the arc starts.
    pub offset: f64,
}

pub fn circumference() -> f64 {
    2.0 * PI * DOUGHNUT_RADIUS
}

/// Slices in category order. Non-positive totals are skipped.
pub fn doughnut_slices(totals: &CategoryTotals) -> Vec<DoughnutSlice> {
    let entries: Vec<(&str, f64)> = ordered_totals(totals)
        .into_iter()
        .filter(|(_, amount)| *amount > 0.0)
        .collect();
    let total: f64 = entries.iter().map(|(_, amount)| amount).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let full = circumference();
    let mut offset = 0.0;
    entries
        .into_iter()
        .map(|(label, amount)| {
            let share = amount / total;
            let slice = DoughnutSlice {
                label: label.to_string(),
                color: style_for_label(label).color,
                amount,
                share,
                dash: share * full,
                offset,
            };
            offset += slice.dash;
            slice
        })
        .collect()
}
