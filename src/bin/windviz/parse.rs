//! Parser for the `"frequency,amplitude;frequency,amplitude"` entry format.
//!
//! The mini-format is a presentation-layer concern: pairs are separated by
//! semicolons, the two numbers of a pair by a comma. Malformed pairs (wrong
//! field count, unparseable numbers, non-positive frequency) are silently
//! skipped so the user can keep typing without the charts erroring out.

use fourier_winding::signal::{CompositeWave, SineWave};

/// Parse the entered wave list into `(frequency, amplitude)` pairs.
pub fn parse_pairs(input: &str) -> Vec<(f64, f64)> {
    input
        .split(';')
        .filter_map(|pair| {
            let mut fields = pair.split(',');
            let freq = fields.next()?.trim().parse::<f64>().ok()?;
            let amplitude = fields.next()?.trim().parse::<f64>().ok()?;
            if fields.next().is_some() {
                return None;
            }
            Some((freq, amplitude))
        })
        .collect()
}

/// Build a composite wave from the entered list, skipping pairs that cannot
/// form a valid sine wave.
pub fn parse_wave_list(input: &str) -> CompositeWave {
    let mut composite = CompositeWave::new();
    for (freq, amplitude) in parse_pairs(input) {
        if let Ok(wave) = SineWave::from_frequency(freq, amplitude, 0.0, 0.0) {
            composite.push(Box::new(wave));
        }
    }
    composite
}
