//! Piecewise-linear mapping from progress to an output value.

/// Errors raised when building a [`Keyframes`] mapping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyframesError {
    #[error("Input has {input} stops but output has {output}")]
    LengthMismatch { input: usize, output: usize },

    #[error("At least two stops are required")]
    TooFewStops,

    #[error("Input stops must be strictly increasing")]
    NotIncreasing,
}

/// Maps an input range onto output values by linear interpolation between
/// stops. Inputs outside the first/last stop clamp to the edge outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Keyframes {
    pub fn new(input: &[f64], output: &[f64]) -> Result<Self, KeyframesError> {
        if input.len() != output.len() {
            return Err(KeyframesError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(KeyframesError::TooFewStops);
        }
        if input.windows(2).any(|pair| !(pair[0] < pair[1])) {
            return Err(KeyframesError::NotIncreasing);
        }

        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
        })
    }

    /// Build from stops already known to be valid.
    pub(crate) fn from_trusted(input: &[f64], output: &[f64]) -> Self {
        debug_assert!(Self::new(input, output).is_ok());
        Self {
            input: input.to_vec(),
            output: output.to_vec(),
        }
    }

    pub fn sample(&self, x: f64) -> f64 {
        let last = self.input.len() - 1;
        if x.is_nan() || x <= self.input[0] {
            return self.output[0];
        }
        if x >= self.input[last] {
            return self.output[last];
        }

        // First stop strictly above x; the loop above guarantees 1..=last.
        let upper = self.input.partition_point(|stop| *stop <= x);
        let lower = upper - 1;
        let t = (x - self.input[lower]) / (self.input[upper] - self.input[lower]);
        self.output[lower] + (self.output[upper] - self.output[lower]) * t
    }
}
