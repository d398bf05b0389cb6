//! End-to-end pipeline: compose a signal, wind it, average it, sweep it.

use fourier_winding::signal::{CompositeWave, Signal, SineWave};
use fourier_winding::spectrum::{average_position, sweep, Sweep};
use fourier_winding::winding::wind_shape;

/// The 3Blue1Brown-style demo signal: two tones at 2 and 3 cycles per unit.
fn demo_signal() -> CompositeWave {
    let mut composite = CompositeWave::new();
    composite.push(Box::new(
        SineWave::from_frequency(2.0, 1.0, 0.0, 0.0).expect("valid frequency"),
    ));
    composite.push(Box::new(
        SineWave::from_frequency(3.0, 0.5, 0.0, 0.0).expect("valid frequency"),
    ));
    composite
}

#[test]
fn full_pipeline_produces_consistent_curves() {
    let signal = demo_signal();

    let samples = signal.sample(0.0, 10.0, 0.01).expect("valid window");
    assert_eq!(samples.xs.len(), samples.ys.len());
    assert!(samples.len() >= 1001);

    let shape = wind_shape(&signal, 2.0, 0.0, 10.0, 0.01).expect("valid transform");
    assert_eq!(shape.len(), samples.len());

    let (re, im) = average_position(&shape.x, &shape.y).expect("non-empty shape");
    assert!(re.is_finite() && im.is_finite());
}

#[test]
fn spectrum_peaks_at_the_component_frequencies() {
    let signal = demo_signal();
    let spectrum = sweep(&signal, 1.0, 5.0, 0.01).expect("valid sweep");

    let magnitude = |target: f64| {
        let i = spectrum
            .frequencies
            .iter()
            .position(|&f| (f - target).abs() < 5e-3)
            .expect("frequency on the grid");
        (spectrum.re[i].powi(2) + spectrum.im[i].powi(2)).sqrt()
    };

    // Both component tones resonate; a frequency between them does not
    let off = magnitude(2.5);
    assert!(
        magnitude(2.0) > 3.0 * off,
        "2 Hz component: {} vs off-resonance {}",
        magnitude(2.0),
        off
    );
    assert!(
        magnitude(3.0) > 3.0 * off,
        "3 Hz component: {} vs off-resonance {}",
        magnitude(3.0),
        off
    );
    // The louder tone produces the taller peak
    assert!(magnitude(2.0) > magnitude(3.0));
}

#[test]
fn incremental_sweep_can_be_consumed_in_chunks() {
    let signal = demo_signal();
    let mut lazy = Sweep::new(&signal, 1.0, 4.0, 0.1);
    let total = lazy.remaining();

    let mut collected = Vec::new();
    while lazy.remaining() > 0 {
        for point in lazy.by_ref().take(7) {
            collected.push(point.expect("valid sweep point"));
        }
    }
    assert_eq!(collected.len(), total);

    let bulk = sweep(&signal, 1.0, 4.0, 0.1).expect("valid sweep");
    for (i, point) in collected.iter().enumerate() {
        assert_eq!(point.frequency, bulk.frequencies[i]);
        assert_eq!(point.re, bulk.re[i]);
        assert_eq!(point.im, bulk.im[i]);
    }
}
