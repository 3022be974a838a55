#![allow(dead_code)]

use histogrammar::UserFcn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const EPS: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * (1.0 + a.abs().max(b.abs()))
}

/// One measured event.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

/// Events with `x` spread past both edges of `[0, 10)`, a few NaN `x`
/// values and weights that are sometimes zero or negative.
pub fn events(n: usize, seed: u64) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Event {
            x: if rng.random_range(0..40) == 0 {
                f64::NAN
            } else {
                rng.random_range(-2.0..12.0)
            },
            y: rng.random_range(-5.0..5.0),
            weight: rng.random_range(-0.5..2.0),
        })
        .collect()
}

/// Contiguous shards split at random cut points; some may be empty.
pub fn shards(data: &[Event], parts: usize, seed: u64) -> Vec<&[Event]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cuts: Vec<usize> = (1..parts).map(|_| rng.random_range(0..=data.len())).collect();
    cuts.sort_unstable();

    let mut out = Vec::with_capacity(parts);
    let mut start = 0;
    for cut in cuts {
        out.push(&data[start..cut]);
        start = cut;
    }
    out.push(&data[start..]);
    out
}

pub fn x() -> UserFcn<Event> {
    UserFcn::named("x", |e: &Event| e.x)
}

pub fn y() -> UserFcn<Event> {
    UserFcn::named("y", |e: &Event| e.y)
}

pub fn weight() -> UserFcn<Event> {
    UserFcn::named("weight", |e: &Event| e.weight)
}
