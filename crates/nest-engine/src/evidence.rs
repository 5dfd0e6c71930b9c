/// Running rectangle-rule estimate `Z = sum L_i * w_i`.
#[derive(Debug, Clone, Default)]
pub struct EvidenceAccumulator {
    evidence: f64,
    trace: Vec<f64>,
    tail: Option<f64>,
}

impl EvidenceAccumulator {
    /// Starts at `Z = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current evidence estimate.
    pub fn evidence(&self) -> f64 {
        self.evidence
    }

    /// Evidence after each accumulated step, excluding the tail correction.
    pub fn trace(&self) -> &[f64] {
        &self.trace
    }

    /// Tail correction applied by [`EvidenceAccumulator::finalize`], if any.
    pub fn tail_correction(&self) -> Option<f64> {
        self.tail
    }

    /// Adds the increment of a discarded likelihood over its volume decrement.
    pub fn add(&mut self, likelihood: f64, decrement: f64) -> f64 {
        self.evidence += likelihood * decrement;
        self.trace.push(self.evidence);
        self.evidence
    }

    /// Adds `X_last * max(live likelihoods)` for the volume no discard accounted for.
    ///
    /// The live maximum is an upper bound on the remaining contribution and is
    /// used as is; it is not replaced by the live mean.
    pub fn finalize(&mut self, last_volume: f64, live_max: f64) -> f64 {
        let tail = last_volume * live_max;
        self.tail = Some(tail);
        self.evidence += tail;
        self.evidence
    }

    /// Splits the accumulator into `(evidence, trace, tail_correction)`.
    pub fn into_parts(self) -> (f64, Vec<f64>, f64) {
        (self.evidence, self.trace, self.tail.unwrap_or(0.0))
    }
}
