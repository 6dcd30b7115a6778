#![allow(clippy::float_cmp)]

use super::*;
use crate::fakes::{DrawOp, RecordingSurface, count};

fn body() -> Body {
    Body { x: 120.0, y: 45.0, scale: 0.5, hue_deg: 200.0 }
}

fn ellipses(ops: &[DrawOp]) -> Vec<(f64, f64, f64, f64)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Ellipse { x, y, rx, ry } => Some((*x, *y, *rx, *ry)),
            _ => None,
        })
        .collect()
}

// --- Primary ---

#[test]
fn primary_places_then_restores() {
    let mut surface = RecordingSurface::new();
    draw_primary(Some(&mut surface), &body());
    let ops = surface.ops();
    assert_eq!(&ops[..3], &[DrawOp::Save, DrawOp::Translate(120.0, 45.0), DrawOp::Scale(0.5, 0.5)]);
    assert_eq!(ops.last(), Some(&DrawOp::Restore));
    assert_eq!(count(&ops, |op| *op == DrawOp::Save), 1);
    assert_eq!(count(&ops, |op| *op == DrawOp::Restore), 1);
}

#[test]
fn primary_draws_hull_dome_and_lights() {
    let mut surface = RecordingSurface::new();
    draw_primary(Some(&mut surface), &body());
    let ops = surface.ops();
    let shapes = ellipses(&ops);
    assert_eq!(shapes.len(), 2 + LIGHT_COUNT);
    assert_eq!(shapes[0], (0.0, 0.0, HULL_RADIUS_X, HULL_RADIUS_Y));
    assert_eq!(shapes[1], (0.0, -DOME_OFFSET_Y, DOME_RADIUS_X, DOME_RADIUS_Y));
    assert_eq!(count(&ops, |op| *op == DrawOp::Fill), shapes.len());
    assert_eq!(count(&ops, |op| *op == DrawOp::BeginPath), shapes.len());
    assert_eq!(count(&ops, |op| *op == DrawOp::ClosePath), shapes.len());
}

#[test]
fn primary_lights_are_evenly_spaced_and_symmetric() {
    let mut surface = RecordingSurface::new();
    draw_primary(Some(&mut surface), &body());
    let lights = ellipses(&surface.ops()).into_iter().skip(2).collect::<Vec<_>>();
    let xs = lights.iter().map(|l| l.0).collect::<Vec<_>>();

    let sum: f64 = xs.iter().sum();
    assert!(sum.abs() < 1e-9);
    let gap = xs[1] - xs[0];
    for pair in xs.windows(2) {
        assert!((pair[1] - pair[0] - gap).abs() < 1e-9);
    }
    for light in &lights {
        assert_eq!(light.1, LIGHT_OFFSET_Y);
        assert!(light.1 > 0.0, "lights sit below the hull centre");
    }
}

#[test]
fn primary_sets_glow() {
    let mut surface = RecordingSurface::new();
    draw_primary(Some(&mut surface), &body());
    let ops = surface.ops();
    assert!(ops.contains(&DrawOp::ShadowBlur(GLOW_BLUR)));
    assert!(ops.iter().any(|op| matches!(op, DrawOp::ShadowColor(c) if c.starts_with("hsla(200.0,"))));
}

// --- Escort ---

#[test]
fn escort_draws_single_hull_without_dome_or_lights() {
    let mut surface = RecordingSurface::new();
    draw_escort(Some(&mut surface), &body());
    let ops = surface.ops();
    assert_eq!(ellipses(&ops), vec![(0.0, 0.0, ESCORT_RADIUS_X, ESCORT_RADIUS_Y)]);
    assert!(ops.contains(&DrawOp::ShadowBlur(GLOW_BLUR)));
    assert_eq!(ops.first(), Some(&DrawOp::Save));
    assert_eq!(ops.last(), Some(&DrawOp::Restore));
}

#[test]
fn escort_is_smaller_than_primary_hull() {
    assert!(ESCORT_RADIUS_X < HULL_RADIUS_X);
    assert!(ESCORT_RADIUS_Y < HULL_RADIUS_Y);
}

// --- Failure modes ---

#[test]
fn missing_surface_is_noop() {
    draw_primary(None::<&mut RecordingSurface>, &body());
    draw_escort(None::<&mut RecordingSurface>, &body());
}

#[test]
fn failed_primitive_still_restores_state() {
    let mut surface = RecordingSurface::failing();
    draw_primary(Some(&mut surface), &body());
    let ops = surface.ops();
    assert_eq!(ops.first(), Some(&DrawOp::Save));
    assert_eq!(ops.last(), Some(&DrawOp::Restore));
    assert!(!ops.contains(&DrawOp::Fill));

    let mut surface = RecordingSurface::failing();
    draw_escort(Some(&mut surface), &body());
    assert_eq!(surface.ops().last(), Some(&DrawOp::Restore));
}

// --- Colour ---

#[test]
fn hsla_wraps_hue() {
    assert_eq!(hsla(370.0, 50.0, 40.0, 0.5), "hsla(10.0, 50%, 40%, 0.50)");
    assert_eq!(hsla(-30.0, 100.0, 80.0, 1.0), "hsla(330.0, 100%, 80%, 1.00)");
}
