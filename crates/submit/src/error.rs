use core::error::Error;

/// Errors raised by the submission helper routines.
#[derive(Debug, derive_more::Display)]
pub enum SubmitError {
    #[display("Requirement failed: {message}")]
    RequirementFailed { message: String },
    #[display("Could not load driver pod from template file")]
    TemplateLoadFailed,
    #[display("Master URL {url} does not start with k8s://")]
    MalformedMasterUrl { url: String },
    #[display("Failed to initialize Kubernetes API client: {message}")]
    ClientInitFailed { message: String },
}

impl Error for SubmitError {}
