use std::num::ParseFloatError;
use thiserror::Error;

/// Error returned when parsing a vector from its `(x, y)` / `(x, y, z)` text form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseVectorError {
    #[error("vector must be enclosed in parentheses")]
    MissingParentheses,
    #[error("wrong number of components (expected: {expected}, actual: {actual})")]
    WrongComponentCount {
        expected: usize,
        actual: usize,
    },
    #[error("component {index} is not a number")]
    InvalidComponent {
        index: usize,
        #[source]
        source: ParseFloatError,
    },
}

/// Splits `"(a, b, ...)"` into exactly `N` floats.
pub(crate) fn parse_components<const N: usize>(s: &str) -> Result<[f64; N], ParseVectorError> {
    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ParseVectorError::MissingParentheses)?;

    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != N {
        return Err(ParseVectorError::WrongComponentCount {
            expected: N,
            actual: parts.len(),
        });
    }

    let mut components = [0.0; N];
    for (index, (slot, part)) in components.iter_mut().zip(&parts).enumerate() {
        *slot = part
            .trim()
            .parse()
            .map_err(|source| ParseVectorError::InvalidComponent { index, source })?;
    }
    Ok(components)
}
