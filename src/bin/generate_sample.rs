//! Writes a synthetic `spacex_launch_dash.csv` in the layout the dashboard
//! loads (pandas export with an unnamed index column).
//!
//! Usage: `generate_sample [OUTPUT]`

use anyhow::{Context, Result};
use serde::Serialize;

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

    fn pick<'a>(&mut self, weighted: &[(&'a str, f64)]) -> &'a str {
        let total: f64 = weighted.iter().map(|(_, w)| w).sum();
        let mut roll = self.next_f64() * total;
        for &(item, weight) in weighted {
            if roll < weight {
                return item;
            }
            roll -= weight;
        }
        weighted[weighted.len() - 1].0
    }
}

#[derive(Serialize)]
struct LaunchRow<'a> {
    #[serde(rename = "")]
    index: usize,
    #[serde(rename = "Flight Number")]
    flight_number: usize,
    #[serde(rename = "Launch Site")]
    site: &'a str,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    category: &'a str,
}

/// Booster generations: (category, last flight number, max payload, success rate).
const GENERATIONS: [(&str, usize, f64, f64); 5] = [
    ("v1.0", 5, 700.0, 0.2),
    ("v1.1", 20, 5000.0, 0.35),
    ("FT", 40, 9600.0, 0.75),
    ("B4", 48, 9600.0, 0.55),
    ("B5", 56, 9600.0, 0.95),
];

const SITES: [(&str, f64); 4] = [
    ("CCAFS LC-40", 0.45),
    ("VAFB SLC-4E", 0.18),
    ("KSC LC-39A", 0.23),
    ("CCAFS SLC-40", 0.14),
];

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "spacex_launch_dash.csv".to_string());
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut flight = 1;
    for &(category, last_flight, max_payload, success_rate) in &GENERATIONS {
        while flight <= last_flight {
            let payload = (rng.next_f64() * max_payload * 10.0).round() / 10.0;
            let row = LaunchRow {
                index: flight - 1,
                flight_number: flight,
                site: rng.pick(&SITES),
                class: u8::from(rng.next_f64() < success_rate),
                payload_mass_kg: payload,
                booster_version: format!("F9 {category}  B{}", 1000 + flight),
                category,
            };
            writer
                .serialize(&row)
                .with_context(|| format!("writing flight {flight}"))?;
            flight += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Wrote {} launches to {output_path}", flight - 1);
    println!("Wrote {} launches to {output_path}", flight - 1);
    Ok(())
}
