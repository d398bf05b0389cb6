use std::ops::{Index, IndexMut};

use crate::error::WindingError;
use crate::signal::{Samples, Signal};

/*
Composite Wave
==============

A composite wave is an ordered list of generators whose outputs are summed
pointwise - the additive model of a sound made of several pure tones:

    y(x) = y_a(x) + y_b(x) + y_c(x) + ...

Every element is sampled over the IDENTICAL window and step, so they all
produce the same x-grid; the composite keeps the first element's grid and
adds the y-sequences elementwise. That shared-grid assumption is a
precondition on the elements (all implementors in this crate satisfy it by
building their grid through `sampling::inclusive_grid`), not something the
composite re-checks per element.

Elements are boxed trait objects rather than a closed enum: anything
sampleable can participate, and the container stays statically typed at
its boundary.

Boundary rule: a composite requires a strictly non-degenerate window
(`x1 < x2`), which is stricter than `SineWave`'s `x1 <= x2`. Both rules
are part of the public contract (see DESIGN.md).
*/

/// An ordered, mutable collection of signal generators summed pointwise.
#[derive(Default)]
pub struct CompositeWave {
    elements: Vec<Box<dyn Signal>>,
}

impl CompositeWave {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append a generator at the end.
    pub fn push(&mut self, signal: Box<dyn Signal>) {
        self.elements.push(signal);
    }

    /// Insert a generator at `index`, shifting later elements right.
    ///
    /// # Panics
    /// Panics if `index > len`, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, signal: Box<dyn Signal>) {
        self.elements.insert(index, signal);
    }

    /// Remove and return the generator at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`, like `Vec::remove`.
    pub fn remove(&mut self, index: usize) -> Box<dyn Signal> {
        self.elements.remove(index)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Signal> {
        self.elements.get(index).map(|signal| signal.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Box<dyn Signal>> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Signal>> {
        self.elements.iter()
    }

    /// Borrow the elements as a slice; range views come from standard slice
    /// indexing on the result.
    pub fn as_slice(&self) -> &[Box<dyn Signal>] {
        &self.elements
    }
}

impl Index<usize> for CompositeWave {
    type Output = Box<dyn Signal>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl IndexMut<usize> for CompositeWave {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl Extend<Box<dyn Signal>> for CompositeWave {
    fn extend<T: IntoIterator<Item = Box<dyn Signal>>>(&mut self, iter: T) {
        self.elements.extend(iter);
    }
}

impl FromIterator<Box<dyn Signal>> for CompositeWave {
    fn from_iter<T: IntoIterator<Item = Box<dyn Signal>>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Signal for CompositeWave {
    /// Sample every element over the identical window and sum pointwise.
    ///
    /// An empty composite yields the empty pair. Requires strict `x1 < x2`.
    fn sample(&self, x1: f64, x2: f64, step: f64) -> Result<Samples, WindingError> {
        let (first, rest) = match self.elements.split_first() {
            None => return Ok(Samples::default()),
            Some(pair) => pair,
        };
        if x1 >= x2 {
            return Err(WindingError::DegenerateInterval {
                left: x1,
                right: x2,
            });
        }

        // The first element supplies the shared grid
        let head = first.sample(x1, x2, step)?;
        let xs = head.xs;
        let mut ys = head.ys;
        for element in rest {
            let samples = element.sample(x1, x2, step)?;
            for (sum, y) in ys.iter_mut().zip(samples.ys.iter()) {
                *sum += y;
            }
        }
        Ok(Samples::new(xs, ys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SineWave;

    const EPS: f64 = 1e-9;

    fn two_tone() -> (SineWave, SineWave, CompositeWave) {
        let wave1 = SineWave::from_frequency(1.0, 1.0, 0.0, 0.0).unwrap();
        let wave2 = SineWave::from_frequency(3.0, 0.5, 0.0, 0.0).unwrap();
        let mut composite = CompositeWave::new();
        composite.push(Box::new(wave1.clone()));
        composite.push(Box::new(wave2.clone()));
        (wave1, wave2, composite)
    }

    #[test]
    fn empty_composite_samples_to_empty_pair() {
        let composite = CompositeWave::new();
        let samples = composite.sample(0.0, 1.0, 0.1).unwrap();
        assert!(samples.xs.is_empty());
        assert!(samples.ys.is_empty());
    }

    #[test]
    fn sample_is_the_elementwise_sum() {
        let (wave1, wave2, composite) = two_tone();
        let summed = composite.sample(0.0, 5.0, 0.1).unwrap();
        let a = wave1.sample(0.0, 5.0, 0.1).unwrap();
        let b = wave2.sample(0.0, 5.0, 0.1).unwrap();

        assert_eq!(summed.xs, a.xs);
        assert_eq!(summed.len(), a.len());
        for i in 0..summed.len() {
            let expected = a.ys[i] + b.ys[i];
            assert!(
                (summed.ys[i] - expected).abs() < EPS,
                "at index {}: expected {}, got {}",
                i,
                expected,
                summed.ys[i]
            );
        }
    }

    #[test]
    fn non_empty_composite_rejects_degenerate_window() {
        let (_, _, composite) = two_tone();
        // Stricter than SineWave: x1 == x2 is already an error here
        assert!(matches!(
            composite.sample(1.0, 1.0, 0.1),
            Err(WindingError::DegenerateInterval { .. })
        ));
        assert!(matches!(
            composite.sample(2.0, 1.0, 0.1),
            Err(WindingError::DegenerateInterval { .. })
        ));
    }

    #[test]
    fn sequence_operations() {
        let (_, _, mut composite) = two_tone();
        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());

        let extra = SineWave::from_frequency(5.0, 0.25, 0.0, 0.0).unwrap();
        composite.insert(1, Box::new(extra));
        assert_eq!(composite.len(), 3);

        composite.remove(0);
        assert_eq!(composite.len(), 2);
        assert_eq!(composite.as_slice().len(), 2);
        assert!(composite.get(5).is_none());

        composite.clear();
        assert!(composite.is_empty());
    }

    #[test]
    fn indexed_replacement_changes_the_sum() {
        let (_, _, mut composite) = two_tone();
        let before = composite.sample(0.0, 2.0, 0.1).unwrap();

        let louder = SineWave::from_frequency(1.0, 10.0, 0.0, 0.0).unwrap();
        composite[0] = Box::new(louder);
        let after = composite.sample(0.0, 2.0, 0.1).unwrap();

        assert_eq!(before.len(), after.len());
        assert!(before.ys != after.ys, "replacing an element must show up");
    }

    #[test]
    fn collects_from_iterator() {
        let composite: CompositeWave = (1..=3)
            .map(|f| {
                Box::new(SineWave::unit_from_frequency(f as f64).unwrap()) as Box<dyn Signal>
            })
            .collect();
        assert_eq!(composite.len(), 3);
    }
}
