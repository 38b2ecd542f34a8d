use std::f64::consts::{FRAC_PI_2, TAU};

use yew::prelude::*;

use crate::types::Skill;

const SIZE: f64 = 320.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 110.0;
// Axis domain is fixed to [0, 100] no matter what levels come back.
const FULL_MARK: f64 = 100.0;
const RINGS: &[f64] = &[20.0, 40.0, 60.0, 80.0, 100.0];
const LABEL_PUSH: f64 = 1.18;

/// Position of axis `i` of `n` at `value` (0..=100). The first axis points
/// straight up and the rest fan out clockwise. Values are not clamped, so
/// an out-of-range level plots outside the outer ring.
pub fn vertex(i: usize, n: usize, value: f64) -> (f64, f64) {
    let angle = (i as f64) * TAU / (n as f64) - FRAC_PI_2;
    let r = RADIUS * value / FULL_MARK;
    (CENTER + r * angle.cos(), CENTER + r * angle.sin())
}

/// SVG points string for the data polygon. Empty input gives an empty
/// string, which draws nothing.
pub fn polygon_points(levels: &[i64]) -> String {
    let n = levels.len();
    levels
        .iter()
        .enumerate()
        .map(|(i, lv)| {
            let (x, y) = vertex(i, n, *lv as f64);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn ring_points(n: usize, value: f64) -> String {
    (0..n)
        .map(|i| {
            let (x, y) = vertex(i, n, value);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Properties, PartialEq)]
pub struct RadarChartProps {
    pub skills: Vec<Skill>,
}

/// Hand-drawn SVG radar chart: one axis per skill, concentric grid rings
/// every 20 points, filled data polygon. With no skills it renders an
/// empty frame, which is accepted behavior rather than an error.
#[function_component(RadarChart)]
pub fn radar_chart(props: &RadarChartProps) -> Html {
    let n = props.skills.len();
    let view_box = format!("0 0 {SIZE} {SIZE}");

    if n == 0 {
        return html! {
            <svg class="radar" viewBox={view_box} width="320" height="320" role="img" />
        };
    }

    let rings = RINGS.iter().map(|v| {
        html! {
            <polygon
                points={ring_points(n, *v)}
                style="fill:none;stroke:#dde3ea;stroke-width:1" />
        }
    });

    let spokes = (0..n).map(|i| {
        let (x, y) = vertex(i, n, FULL_MARK);
        html! {
            <line
                x1={CENTER.to_string()} y1={CENTER.to_string()}
                x2={format!("{x:.1}")} y2={format!("{y:.1}")}
                style="stroke:#dde3ea;stroke-width:1" />
        }
    });

    let labels = props.skills.iter().enumerate().map(|(i, s)| {
        let (x, y) = vertex(i, n, FULL_MARK * LABEL_PUSH);
        html! {
            <text
                x={format!("{x:.1}")} y={format!("{y:.1}")}
                style="font-size:11px;fill:#6b7685;text-anchor:middle;dominant-baseline:middle">
                { s.name.clone() }
            </text>
        }
    });

    let levels: Vec<i64> = props.skills.iter().map(|s| s.level).collect();

    html! {
        <svg class="radar" viewBox={view_box} width="320" height="320" role="img">
            { for rings }
            { for spokes }
            <polygon
                points={polygon_points(&levels)}
                style="fill:#1976d2;fill-opacity:0.55;stroke:#1976d2;stroke-width:2" />
            { for labels }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn empty_levels_draw_nothing() {
        assert_eq!(polygon_points(&[]), "");
    }

    #[test]
    fn one_point_per_skill() {
        assert_eq!(polygon_points(&[80, 90]).split_whitespace().count(), 2);
        assert_eq!(
            polygon_points(&[10, 20, 30, 40, 50]).split_whitespace().count(),
            5
        );
    }

    #[test]
    fn first_axis_points_straight_up() {
        let (x, y) = vertex(0, 4, 100.0);
        assert!(close(x, CENTER));
        assert!(close(y, CENTER - RADIUS));
    }

    #[test]
    fn axes_fan_out_clockwise() {
        // screen coordinates: a quarter turn from "up" lands on the right
        let (x, y) = vertex(1, 4, 100.0);
        assert!(close(x, CENTER + RADIUS));
        assert!(close(y, CENTER));
    }

    #[test]
    fn level_scales_distance_from_center() {
        let (_, y) = vertex(0, 3, 50.0);
        assert!(close(y, CENTER - RADIUS / 2.0));
    }

    #[test]
    fn out_of_range_levels_are_not_clamped() {
        let (_, y) = vertex(0, 1, 150.0);
        assert!(y < CENTER - RADIUS);
    }
}
