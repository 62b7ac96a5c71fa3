//! Write a synthetic day of field-logger readings for trying out `sensor-stats`.
//!
//! Usage: `generate_sample [OUTPUT]` (default `sensors_2025-06-22.csv`).

use anyhow::{Context, Result};

const DATE: &str = "2025-06-22";

/// One reading every five minutes.
const INTERVAL_MINUTES: u32 = 5;

/// SplitMix64: one `u64` of state, plenty for synthetic sensor noise.
struct Noise(u64);

impl Noise {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * f64::EPSILON / 2.0
    }

    /// Approximately normal: the sum of 12 uniforms has variance 1.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = (0..12).map(|_| self.uniform()).sum::<f64>() - 6.0;
        mean + std_dev * z
    }
}

/// Daily cycle in [-1, 1], peaking at 14:00.
fn daily_cycle(minute_of_day: u32) -> f64 {
    let hours = minute_of_day as f64 / 60.0;
    (2.0 * std::f64::consts::PI * (hours - 8.0) / 24.0).sin()
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| format!("sensors_{DATE}.csv"));

    let mut noise = Noise(42);
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record(["Timestamp", "Temperatura", "Humedad", "Lux", "HumedadSuelo"])?;

    let mut rows = 0;
    let mut malformed = 0;
    for minute in (0..24 * 60).step_by(INTERVAL_MINUTES as usize) {
        let timestamp = format!("{DATE} {:02}:{:02}:00", minute / 60, minute % 60);
        let cycle = daily_cycle(minute);

        let temperature = 18.0 + 6.0 * cycle + noise.normal(0.0, 0.4);
        let humidity = (65.0 - 15.0 * cycle + noise.normal(0.0, 1.5)).clamp(0.0, 100.0);
        let lux = (40_000.0 * cycle + noise.normal(0.0, 500.0)).max(0.0);
        let soil = (45.0 + noise.normal(0.0, 2.0)).round().clamp(0.0, 100.0) as i64;

        // Dropped LoRa packets leave short or garbled lines in the log.
        let roll = noise.uniform();
        if roll < 0.02 {
            writer.write_record([timestamp.as_str(), "nan?"])?;
            malformed += 1;
        } else if roll < 0.04 {
            writer.write_record([timestamp.as_str(), "", "", "", ""])?;
            malformed += 1;
        } else {
            writer.write_record([
                timestamp,
                format!("{temperature:.2}"),
                format!("{humidity:.1}"),
                format!("{lux:.0}"),
                soil.to_string(),
            ])?;
        }
        rows += 1;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} readings ({malformed} malformed) to {output_path}");
    Ok(())
}
