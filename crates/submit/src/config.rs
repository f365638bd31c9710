use std::collections::BTreeMap;

use error_stack::Report;

use crate::error::SubmitError;

/// Extract every configuration entry whose key starts with `prefix`, keyed by
/// the remainder of the key.
///
/// For each returned entry `(k, v)`, `prefix + k` exists verbatim in the
/// source with value `v`. Callers must not configure the same key twice; that
/// is a precondition of the store, not checked here.
pub fn prefixed_key_value_pairs(
    conf: &BTreeMap<String, String>,
    prefix: &str,
) -> BTreeMap<String, String> {
    conf.iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .map(|suffix| (suffix.to_string(), value.clone()))
        })
        .collect()
}

/// Fail when two mutually exclusive options are both configured.
///
/// # Errors
///
/// - [`SubmitError::RequirementFailed`] if both values are present
pub fn require_nand_defined<A, B>(
    a: Option<&A>,
    b: Option<&B>,
    message: &str,
) -> Result<(), Report<SubmitError>> {
    if a.is_some() && b.is_some() {
        return Err(Report::new(SubmitError::RequirementFailed {
            message: message.to_string(),
        }));
    }
    Ok(())
}

/// Fail when exactly one of two options that only make sense together is
/// configured.
///
/// # Errors
///
/// - [`SubmitError::RequirementFailed`] if one value is present without the other
pub fn require_both_or_neither_defined<A, B>(
    a: Option<&A>,
    b: Option<&B>,
    message: &str,
) -> Result<(), Report<SubmitError>> {
    if a.is_some() != b.is_some() {
        return Err(Report::new(SubmitError::RequirementFailed {
            message: message.to_string(),
        }));
    }
    Ok(())
}
