use std::path::PathBuf;

use error_stack::Report;
use error_stack::ResultExt;
use kube::config::KubeConfigOptions;
use kube::config::Kubeconfig;
use kube::Client;
use kube::Config;

use crate::error::SubmitError;
use crate::master::parse_master_url;

/// Build the Kubernetes API client the submission code uses to create driver
/// and executor pods.
///
/// `master` carries the `k8s://` marker. The remainder overrides whatever
/// cluster URL the kubeconfig names, so a submission can target a cluster the
/// ambient kubeconfig does not point at.
///
/// # Errors
///
/// - [`SubmitError::MalformedMasterUrl`] when `master` lacks the marker
/// - [`SubmitError::ClientInitFailed`] when kubeconfig loading or client
///   construction fails
pub async fn submission_client(
    master: &str,
    kubeconfig: Option<PathBuf>,
) -> Result<Client, Report<SubmitError>> {
    let api_server = parse_master_url(master)?;

    let mut config = match kubeconfig {
        Some(path) => {
            let kubeconfig =
                Kubeconfig::read_from(&path).change_context(SubmitError::ClientInitFailed {
                    message: format!("failed to read kubeconfig file: {}", path.display()),
                })?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .change_context(SubmitError::ClientInitFailed {
                    message: format!(
                        "failed to build client config from kubeconfig: {}",
                        path.display()
                    ),
                })?
        }
        // In-cluster environment or ~/.kube/config
        None => Config::infer()
            .await
            .change_context(SubmitError::ClientInitFailed {
                message: "failed to infer client config".to_string(),
            })?,
    };

    config.cluster_url = api_server
        .parse::<http::Uri>()
        .change_context(SubmitError::ClientInitFailed {
            message: format!("invalid API server address: {api_server}"),
        })?;

    Client::try_from(config).change_context(SubmitError::ClientInitFailed {
        message: "failed to create Kubernetes client".to_string(),
    })
}
