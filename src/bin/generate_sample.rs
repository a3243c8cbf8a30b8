//! Write a synthetic on-time performance CSV for trying the dashboard
//! without the real BTS extract.
//!
//! Usage: `generate_sample [OUTPUT] [ROWS]`
//! (defaults: `data/airline_data.csv`, 5000 rows)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

const DEFAULT_OUTPUT: &str = "data/airline_data.csv";
const DEFAULT_ROWS: usize = 5000;

const YEARS: [i32; 3] = [2010, 2011, 2012];
const AIRPORTS: [&str; 6] = ["ATL", "ORD", "DFW", "LAX", "JFK", "SEA"];

/// Carrier code with a base delay scale so carriers are distinguishable.
const CARRIERS: [(&str, f64); 6] = [
    ("AA", 1.2),
    ("DL", 0.8),
    ("UA", 1.1),
    ("WN", 0.9),
    ("B6", 1.4),
    ("AS", 0.7),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Row<'a> {
    year: i32,
    month: u8,
    #[serde(rename = "Reporting_Airline")]
    reporting_airline: &'a str,
    origin: &'a str,
    dest: &'a str,
    div1_airport: Option<&'a str>,
    div1_tail_num: Option<&'a str>,
    div2_airport: Option<&'a str>,
    div2_tail_num: Option<&'a str>,
    carrier_delay: Option<f64>,
    weather_delay: Option<f64>,
    #[serde(rename = "NASDelay")]
    nas_delay: Option<f64>,
    security_delay: Option<f64>,
    late_aircraft_delay: Option<f64>,
}

/// A non-negative delay in minutes, or `None` for flights that were on time
/// and so carry no cause breakdown.
fn delay(rng: &mut SimpleRng, mean: f64, on_time: bool) -> Option<f64> {
    if on_time {
        return None;
    }
    Some(rng.gauss(mean, mean * 0.5).max(0.0).round())
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let rows = match args.next() {
        Some(n) => n.parse().with_context(|| format!("'{n}' is not a row count"))?,
        None => DEFAULT_ROWS,
    };

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    write_sample(&output, rows)?;
    println!("Wrote {rows} flights to {}", output.display());
    Ok(())
}

fn write_sample(path: &Path, rows: usize) -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    for _ in 0..rows {
        let year = YEARS[rng.below(YEARS.len())];
        let month = rng.below(12) as u8 + 1;
        let (carrier, scale) = CARRIERS[rng.below(CARRIERS.len())];
        let origin = AIRPORTS[rng.below(AIRPORTS.len())];
        let dest = AIRPORTS[rng.below(AIRPORTS.len())];

        // Winter and summer months see more weather trouble.
        let season = if matches!(month, 1 | 2 | 6 | 7 | 12) { 1.8 } else { 1.0 };
        let on_time = rng.next_f64() < 0.6;
        let diverted = rng.next_f64() < 0.02;

        let row = Row {
            year,
            month,
            reporting_airline: carrier,
            origin,
            dest,
            div1_airport: diverted.then_some(AIRPORTS[rng.below(AIRPORTS.len())]),
            div1_tail_num: diverted.then_some("N00701"),
            div2_airport: None,
            div2_tail_num: None,
            carrier_delay: delay(&mut rng, 15.0 * scale, on_time),
            weather_delay: delay(&mut rng, 3.0 * season, on_time),
            nas_delay: delay(&mut rng, 12.0 * season, on_time),
            security_delay: delay(&mut rng, 0.2, on_time),
            late_aircraft_delay: delay(&mut rng, 20.0 * scale, on_time),
        };
        writer.serialize(row).context("writing CSV row")?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}
