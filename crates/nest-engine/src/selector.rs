use nest_core::{ErrorInfo, NestError};

/// Returns the index of the strict minimum of `likelihoods`.
///
/// Ties for the minimum are never broken arbitrarily: a tied minimum is
/// reported as [`NestError::DegenerateMinimum`] listing every tied index.
pub fn select_worst(likelihoods: &[f64]) -> Result<usize, NestError> {
    let (&first, rest) = likelihoods.split_first().ok_or_else(|| {
        NestError::invalid_config("empty-population", "cannot select from an empty population")
    })?;

    let mut worst = 0;
    let mut minimum = first;
    for (offset, &value) in rest.iter().enumerate() {
        if value < minimum {
            minimum = value;
            worst = offset + 1;
        }
    }

    let tied: Vec<usize> = likelihoods
        .iter()
        .enumerate()
        .filter(|(_, &value)| value == minimum)
        .map(|(idx, _)| idx)
        .collect();
    if tied.len() > 1 {
        let indices = tied
            .iter()
            .map(|idx| idx.to_string())
            .collect::<Vec<_>>()
            .join(",");
        return Err(NestError::DegenerateMinimum(
            ErrorInfo::new(
                "degenerate-minimum",
                "more than one live sample attains the minimum likelihood",
            )
            .with_context("likelihood", minimum.to_string())
            .with_context("indices", indices)
            .with_hint(
                "the likelihood or the constrained sampler is not continuous enough to avoid ties",
            ),
        ));
    }

    Ok(worst)
}
