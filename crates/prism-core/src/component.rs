//! Spectral components and the collections built from them.

use crate::math::normalize_degrees;

/// One harmonic of a periodic waveform.
///
/// `k = 0` is the DC (constant) term; `k >= 1` is the sine harmonic at
/// `k` cycles per period.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SpectralComponent {
    /// Harmonic index
    pub k: usize,
    /// Magnitude of the harmonic (non-negative)
    pub amplitude: f64,
    /// Phase in degrees, conventionally `[0, 360)`
    pub phase: f64,
}

impl SpectralComponent {
    pub fn new(k: usize, amplitude: f64, phase: f64) -> Self {
        Self {
            k,
            amplitude,
            phase,
        }
    }

    /// DC component with the given level.
    pub fn dc(amplitude: f64) -> Self {
        Self::new(0, amplitude, 0.0)
    }

    pub fn is_dc(&self) -> bool {
        self.k == 0
    }

    /// Phase wrapped into `[0, 360)`.
    pub fn normalized_phase(&self) -> f64 {
        normalize_degrees(self.phase)
    }

    /// Peak amplitude of the real sinusoid this bin represents.
    ///
    /// With 1/N scaling a real sinusoid of amplitude `A` splits its energy
    /// between bins `k` and `N - k`, each holding `A / 2`. Doubling the bin
    /// magnitude recovers `A` for any `0 < k < N / 2`. DC is not split.
    pub fn peak_amplitude(&self) -> f64 {
        if self.is_dc() {
            self.amplitude
        } else {
            self.amplitude * 2.0
        }
    }

    /// The synthesis component that rebuilds the sinusoid this analyzed bin
    /// stands for.
    ///
    /// Analysis phases are cosine-referenced (`atan2` of the bin) while
    /// synthesis is sine-referenced, so harmonics get `+90°` and their
    /// [`peak_amplitude`](Self::peak_amplitude). DC keeps its magnitude with
    /// phase 0; a negative DC level (bin phase 180°) cannot be expressed as a
    /// non-negative amplitude and comes back positive.
    pub fn to_partial(&self) -> SpectralComponent {
        if self.is_dc() {
            SpectralComponent::dc(self.amplitude)
        } else {
            SpectralComponent::new(
                self.k,
                self.peak_amplitude(),
                normalize_degrees(self.phase + 90.0),
            )
        }
    }
}

/// Output of spectral analysis: the visible components and their energy.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SpectralResult {
    /// Components in ascending `k` order
    pub components: Vec<SpectralComponent>,
    /// Sum of squared amplitudes over `components` only.
    ///
    /// This is the energy of the truncated spectrum, not the full-signal
    /// Parseval total.
    pub energy: f64,
}

impl SpectralResult {
    /// Build a result, computing energy from the given components.
    pub fn from_components(components: Vec<SpectralComponent>) -> Self {
        let energy = components.iter().map(|c| c.amplitude * c.amplitude).sum();
        Self { components, energy }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Look up the component with harmonic index `k`.
    pub fn component(&self, k: usize) -> Option<&SpectralComponent> {
        self.components.iter().find(|c| c.k == k)
    }

    /// The component with the largest amplitude, if any.
    pub fn dominant(&self) -> Option<&SpectralComponent> {
        self.components
            .iter()
            .max_by(|a, b| a.amplitude.total_cmp(&b.amplitude))
    }

    /// Every component mapped through [`SpectralComponent::to_partial`].
    pub fn to_partials(&self) -> Vec<SpectralComponent> {
        self.components.iter().map(|c| c.to_partial()).collect()
    }
}

/// Editable set of components keyed by harmonic index.
///
/// Inserting a component whose `k` is already present replaces it, so
/// building a set from a list of edits keeps the last write per `k`.
/// Iteration is in ascending `k` order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<SpectralComponent>", into = "Vec<SpectralComponent>")
)]
pub struct ComponentSet {
    components: Vec<SpectralComponent>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the component for `component.k`.
    ///
    /// Returns the component it replaced, if any.
    pub fn insert(&mut self, component: SpectralComponent) -> Option<SpectralComponent> {
        match self.position(component.k) {
            Ok(idx) => Some(std::mem::replace(&mut self.components[idx], component)),
            Err(idx) => {
                self.components.insert(idx, component);
                None
            }
        }
    }

    pub fn get(&self, k: usize) -> Option<&SpectralComponent> {
        self.position(k).ok().map(|idx| &self.components[idx])
    }

    pub fn remove(&mut self, k: usize) -> Option<SpectralComponent> {
        self.position(k).ok().map(|idx| self.components.remove(idx))
    }

    /// Set the amplitude of harmonic `k`, creating it with phase 0 if absent.
    ///
    /// Negative amplitudes are clamped to 0.
    pub fn set_amplitude(&mut self, k: usize, amplitude: f64) {
        let amplitude = amplitude.max(0.0);
        match self.position(k) {
            Ok(idx) => self.components[idx].amplitude = amplitude,
            Err(idx) => self
                .components
                .insert(idx, SpectralComponent::new(k, amplitude, 0.0)),
        }
    }

    /// Set the phase of harmonic `k`, creating it with amplitude 0 if absent.
    pub fn set_phase(&mut self, k: usize, phase: f64) {
        match self.position(k) {
            Ok(idx) => self.components[idx].phase = phase,
            Err(idx) => self
                .components
                .insert(idx, SpectralComponent::new(k, 0.0, phase)),
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpectralComponent> {
        self.components.iter()
    }

    /// Components in ascending `k` order.
    pub fn as_slice(&self) -> &[SpectralComponent] {
        &self.components
    }

    pub fn into_vec(self) -> Vec<SpectralComponent> {
        self.components
    }

    fn position(&self, k: usize) -> std::result::Result<usize, usize> {
        self.components.binary_search_by_key(&k, |c| c.k)
    }
}

impl FromIterator<SpectralComponent> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = SpectralComponent>>(iter: I) -> Self {
        let mut set = ComponentSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<SpectralComponent> for ComponentSet {
    fn extend<I: IntoIterator<Item = SpectralComponent>>(&mut self, iter: I) {
        for component in iter {
            self.insert(component);
        }
    }
}

impl From<Vec<SpectralComponent>> for ComponentSet {
    fn from(components: Vec<SpectralComponent>) -> Self {
        components.into_iter().collect()
    }
}

impl From<ComponentSet> for Vec<SpectralComponent> {
    fn from(set: ComponentSet) -> Self {
        set.components
    }
}

impl From<SpectralResult> for ComponentSet {
    fn from(result: SpectralResult) -> Self {
        result.components.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ComponentSet {
    type Item = &'a SpectralComponent;
    type IntoIter = std::slice::Iter<'a, SpectralComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
