//! Writes `sample_data.csv`: a wide spectroscopy export with one column per
//! wavelength, plus identifier, reference, prediction, metadata, timestamp,
//! and product columns. Deterministic output for manual testing of the
//! viewer.

use anyhow::{Context, Result};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (splitmix64).
struct SampleRng {
    state: u64,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Symmetric noise in [-level, level].
    fn noise(&mut self, level: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * level
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng::new(42);

    // Wavelengths: 1200 → 1798, step 2.
    let wavelengths: Vec<f64> = (0..300).map(|i| 1200.0 + i as f64 * 2.0).collect();

    let products: [(&str, [(f64, f64, f64); 2]); 3] = [
        ("Product Wheat", [(1350.0, 60.0, 0.8), (1650.0, 40.0, 0.5)]),
        ("Product Rye", [(1420.0, 55.0, 0.6), (1700.0, 45.0, 0.7)]),
        ("Product Barley", [(1300.0, 70.0, 0.9), (1580.0, 35.0, 0.4)]),
    ];

    let mut headers: Vec<String> = vec!["Sample".to_string()];
    headers.extend(wavelengths.iter().map(|w| format!("{w}")));
    headers.extend(
        [
            "Protein(LAB)",
            "Predicted(NIR)",
            "MD value pH",
            "StartTime",
            "Product",
        ]
        .map(String::from),
    );

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record(&headers).context("writing header")?;

    let mut n_rows = 0;
    for (p, (product, peaks)) in products.iter().enumerate() {
        for rep in 0..8 {
            let protein = 9.0 + rng.next_f64() * 6.0;
            let scale = protein / 12.0;

            let mut record: Vec<String> = vec![format!("S{:03}", p * 8 + rep + 1)];
            for &wl in &wavelengths {
                let signal: f64 = peaks
                    .iter()
                    .map(|&(mu, sigma, amp)| gaussian(wl, mu, sigma, amp * scale))
                    .sum();
                record.push(format!("{:.6}", signal + rng.noise(0.004)));
            }

            record.push(format!("{protein:.2}"));
            record.push(format!("{:.2}", protein + rng.noise(0.35)));
            record.push(format!("{:.2}", 5.8 + rng.next_f64() * 1.2));
            record.push(format!("2024-03-{:02}T09:{:02}:00", p + 1, rep * 7));
            record.push(product.to_string());

            writer.write_record(&record).context("writing record")?;
            n_rows += 1;
        }
    }

    writer.flush().context("flushing output")?;
    println!(
        "Wrote {n_rows} rows ({} wavelengths each) to {output_path}",
        wavelengths.len()
    );
    Ok(())
}
