/// Termination test `L_max * X_i < f * Z`.
///
/// `live_max` bounds the likelihood of everything still enclosed, so the left
/// side bounds the evidence the run could still gain. The test is a pure
/// function of the run state: re-evaluating it on a terminated state repeats
/// the verdict.
pub fn should_stop(live_max: f64, volume: f64, evidence: f64, tolerance: f64) -> bool {
    live_max * volume < tolerance * evidence
}
