//! Geometry of the revenue line chart, kept free of DOM types

use contracts::dashboards::d400_metrics::DailyRevenue;
use contracts::shared::format::format_brl;

pub const WIDTH: f64 = 640.0;
pub const HEIGHT: f64 = 240.0;
/// Room on the left for the R$ axis labels
pub const PADDING_LEFT: f64 = 88.0;
pub const PADDING_BOTTOM: f64 = 24.0;
pub const PADDING_TOP: f64 = 12.0;
pub const TICK_COUNT: usize = 4;

/// One plotted day, revenue already in reais
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

fn plot_height() -> f64 {
    HEIGHT - PADDING_TOP - PADDING_BOTTOM
}

/// Highest value of the Y axis; never zero so flat series stay on the baseline
pub fn axis_max(points: &[DailyRevenue]) -> f64 {
    let max = points
        .iter()
        .map(|p| p.receipt as f64 / 100.0)
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max
    }
}

fn y_for(value: f64, max: f64) -> f64 {
    PADDING_TOP + plot_height() * (1.0 - value / max)
}

pub fn chart_points(data: &[DailyRevenue]) -> Vec<ChartPoint> {
    let max = axis_max(data);
    let plot_width = WIDTH - PADDING_LEFT;
    let step = if data.len() > 1 {
        plot_width / (data.len() - 1) as f64
    } else {
        0.0
    };

    data.iter()
        .enumerate()
        .map(|(i, day)| {
            let value = day.receipt as f64 / 100.0;
            ChartPoint {
                x: PADDING_LEFT + step * i as f64,
                y: y_for(value, max),
                label: day.date.clone(),
                value,
            }
        })
        .collect()
}

/// `points` attribute of the SVG polyline
pub fn polyline(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evenly spaced labels from 0 to the axis maximum
pub fn axis_ticks(data: &[DailyRevenue]) -> Vec<AxisTick> {
    let max = axis_max(data);
    (0..=TICK_COUNT)
        .map(|i| {
            let value = max * i as f64 / TICK_COUNT as f64;
            AxisTick {
                y: y_for(value, max),
                label: format_brl(value),
            }
        })
        .collect()
}
