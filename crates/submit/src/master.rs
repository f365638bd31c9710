use error_stack::Report;

use crate::error::SubmitError;

/// Scheme marker selecting Kubernetes cluster deployment in a master URL.
pub const MASTER_SCHEME: &str = "k8s://";

/// Strip the `k8s://` marker from a master URL, leaving the API server
/// address.
///
/// # Errors
///
/// - [`SubmitError::MalformedMasterUrl`] when the marker is missing
pub fn parse_master_url(master: &str) -> Result<&str, Report<SubmitError>> {
    master.strip_prefix(MASTER_SCHEME).ok_or_else(|| {
        Report::new(SubmitError::MalformedMasterUrl {
            url: master.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_scheme_marker() {
        assert_eq!(
            parse_master_url("k8s://https://host:443").unwrap(),
            "https://host:443"
        );
        assert_eq!(parse_master_url("k8s://host:443").unwrap(), "host:443");
    }

    #[test]
    fn missing_marker_is_a_reported_error() {
        let err = parse_master_url("https://host:443").unwrap_err();

        assert!(matches!(
            err.current_context(),
            SubmitError::MalformedMasterUrl { .. }
        ));
    }
}
