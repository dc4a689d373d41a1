use dioxus::prelude::*;

use crate::core::format::format_compact;
use crate::dashboard::geometry::{
    axis_ticks, bar_layout, nice_ceiling, BarOrientation, Frame, Margins,
};
use crate::dashboard::legend::{record_fill, ChartTooltip, EmptyChart};
use crate::dashboard::metrics::ChartRecord;

const WIDTH: f64 = 420.0;
const TICKS: usize = 4;

fn frame_for(orientation: BarOrientation, count: usize) -> Frame {
    match orientation {
        BarOrientation::Vertical => Frame {
            width: WIDTH,
            height: 240.0,
            margins: Margins {
                top: 16.0,
                right: 12.0,
                bottom: 36.0,
                left: 44.0,
            },
        },
        BarOrientation::Horizontal => Frame {
            width: WIDTH,
            height: 40.0 + 34.0 * count as f64,
            margins: Margins {
                top: 8.0,
                right: 24.0,
                bottom: 28.0,
                left: 132.0,
            },
        },
    }
}

/// SVG coordinate with two decimals.
fn coord(value: f64) -> String {
    format!("{value:.2}")
}

struct GridLine {
    x1: String,
    y1: String,
    x2: String,
    y2: String,
    label_x: String,
    label_y: String,
    label: String,
}

struct Bar {
    index: usize,
    x: String,
    y: String,
    width: String,
    height: String,
    fill: String,
    class: &'static str,
    label_x: String,
    label_y: String,
    name: String,
}

#[component]
pub fn BarChart(records: Vec<ChartRecord>, orientation: BarOrientation) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    if records.is_empty() {
        return rsx! { EmptyChart {} };
    }

    let frame = frame_for(orientation, records.len());
    let m = frame.margins;
    let values: Vec<u64> = records.iter().map(|r| r.value).collect();
    let max = values.iter().copied().max().unwrap_or(0);
    let axis_max = nice_ceiling(max as f64);
    let active = hovered();

    let grid: Vec<GridLine> = axis_ticks(axis_max, TICKS)
        .into_iter()
        .map(|tick| {
            let label = format_compact(tick);
            match orientation {
                BarOrientation::Vertical => {
                    let y = frame.plot_bottom() - tick / axis_max * frame.plot_height();
                    GridLine {
                        x1: coord(m.left),
                        y1: coord(y),
                        x2: coord(frame.width - m.right),
                        y2: coord(y),
                        label_x: coord(m.left - 6.0),
                        label_y: coord(y + 4.0),
                        label,
                    }
                }
                BarOrientation::Horizontal => {
                    let x = m.left + tick / axis_max * frame.plot_width();
                    GridLine {
                        x1: coord(x),
                        y1: coord(m.top),
                        x2: coord(x),
                        y2: coord(frame.plot_bottom()),
                        label_x: coord(x),
                        label_y: coord(frame.plot_bottom() + 18.0),
                        label,
                    }
                }
            }
        })
        .collect();

    let bars: Vec<Bar> = bar_layout(&values, orientation, &frame, axis_max)
        .into_iter()
        .map(|rect| {
            let record = &records[rect.index];
            let (label_x, label_y) = match orientation {
                BarOrientation::Vertical => (rect.band_center, frame.plot_bottom() + 18.0),
                BarOrientation::Horizontal => (m.left - 8.0, rect.band_center + 4.0),
            };
            Bar {
                index: rect.index,
                x: coord(rect.x),
                y: coord(rect.y),
                width: coord(rect.width),
                height: coord(rect.height),
                fill: record_fill(record),
                class: if active == Some(rect.index) {
                    "chart__bar chart__bar--active"
                } else {
                    "chart__bar"
                },
                label_x: coord(label_x),
                label_y: coord(label_y),
                name: record.name.clone(),
            }
        })
        .collect();

    let (kind, tick_anchor, name_anchor) = match orientation {
        BarOrientation::Vertical => ("chart--bar-vertical", "end", "middle"),
        BarOrientation::Horizontal => ("chart--bar-horizontal", "middle", "end"),
    };
    let tooltip = active.and_then(|i| records.get(i).cloned());

    rsx! {
        div { class: "chart {kind}",
            svg {
                class: "chart__svg",
                view_box: "0 0 {frame.width} {frame.height}",
                g { class: "chart__grid",
                    for (i, tick) in grid.into_iter().enumerate() {
                        g { key: "tick-{i}",
                            line {
                                class: "chart__gridline",
                                x1: "{tick.x1}",
                                y1: "{tick.y1}",
                                x2: "{tick.x2}",
                                y2: "{tick.y2}",
                            }
                            text {
                                class: "chart__tick",
                                x: "{tick.label_x}",
                                y: "{tick.label_y}",
                                text_anchor: "{tick_anchor}",
                                "{tick.label}"
                            }
                        }
                    }
                }
                for bar in bars {
                    g { key: "bar-{bar.index}",
                        rect {
                            class: "{bar.class}",
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                            rx: "3",
                            fill: "{bar.fill}",
                            onmouseenter: move |_| hovered.set(Some(bar.index)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                        text {
                            class: "chart__category",
                            x: "{bar.label_x}",
                            y: "{bar.label_y}",
                            text_anchor: "{name_anchor}",
                            "{bar.name}"
                        }
                    }
                }
            }
            if let Some(record) = tooltip {
                ChartTooltip { record }
            }
        }
    }
}
