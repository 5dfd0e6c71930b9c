use nest_engine::EvidenceAccumulator;

#[test]
fn increments_are_likelihood_times_decrement() {
    let mut acc = EvidenceAccumulator::new();
    assert_eq!(acc.evidence(), 0.0);
    assert_eq!(acc.add(0.5, 0.2), 0.1);
    let z = acc.add(0.75, 0.4);
    assert!((z - 0.4).abs() < 1e-15);
    assert_eq!(acc.trace().len(), 2);
    assert_eq!(acc.tail_correction(), None);
}

#[test]
fn tail_correction_uses_live_maximum() {
    let mut acc = EvidenceAccumulator::new();
    acc.add(0.5, 0.5);
    let live = [0.6, 0.9, 0.7];
    let live_max = live.iter().copied().fold(0.0, f64::max);
    let z = acc.finalize(0.25, live_max);
    assert!((z - (0.25 + 0.25 * 0.9)).abs() < 1e-15);
    assert_eq!(acc.tail_correction(), Some(0.25 * 0.9));

    let (evidence, trace, tail) = acc.into_parts();
    assert_eq!(evidence, z);
    assert_eq!(trace, vec![0.25]);
    assert_eq!(tail, 0.25 * 0.9);
}

#[test]
fn trace_never_decreases() {
    let mut acc = EvidenceAccumulator::new();
    for (likelihood, decrement) in [(0.0, 0.3), (0.1, 0.2), (0.4, 0.1), (0.9, 0.0)] {
        acc.add(likelihood, decrement);
    }
    assert!(acc.trace().windows(2).all(|pair| pair[1] >= pair[0]));
    assert!(acc.evidence() >= 0.0);
}
