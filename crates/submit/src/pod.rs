use std::fs;
use std::path::Path;

use error_stack::Report;
use error_stack::ResultExt;
use k8s_openapi::api::core::v1::Container;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use tracing::error;

use crate::error::SubmitError;

/// A pod specification with its first declared container split off.
///
/// The primary container is held separately so the submission code can finish
/// customizing it before putting it back. Prepending `primary_container` to
/// the pod's remaining container list reconstitutes exactly the template's
/// original list.
#[derive(Debug, Clone)]
pub struct SplitPod {
    pub pod: Pod,
    pub primary_container: Container,
}

/// Load a driver pod specification from a user-supplied template file.
///
/// The first container the template declares becomes the primary container
/// and is removed from the pod; a template declaring no containers yields an
/// empty primary container and the pod untouched.
///
/// # Errors
///
/// - [`SubmitError::TemplateLoadFailed`] for any read or parse failure; the
///   underlying cause is logged and stays attached to the report
pub fn load_pod_from_template(template: &Path) -> Result<SplitPod, Report<SubmitError>> {
    let contents = fs::read_to_string(template)
        .inspect_err(|err| {
            error!(
                "Failed to read pod template {}: {err}",
                template.display()
            );
        })
        .change_context(SubmitError::TemplateLoadFailed)?;
    let pod: Pod = serde_yaml::from_str(&contents)
        .inspect_err(|err| {
            error!(
                "Failed to parse pod template {}: {err}",
                template.display()
            );
        })
        .change_context(SubmitError::TemplateLoadFailed)?;
    Ok(select_primary_container(pod))
}

/// Split off the first declared container as the primary container.
fn select_primary_container(mut pod: Pod) -> SplitPod {
    let primary_container = match pod.spec.as_mut() {
        Some(spec) if !spec.containers.is_empty() => spec.containers.remove(0),
        _ => Container::default(),
    };
    SplitPod {
        pod,
        primary_container,
    }
}

/// Make the driver pod the controller owner of the resource carrying `meta`,
/// so the cluster garbage-collects the resource once the driver pod is gone.
pub fn add_owner_reference(driver_pod: &Pod, meta: &mut ObjectMeta) {
    let reference = OwnerReference {
        api_version: "v1".to_string(),
        kind: "Pod".to_string(),
        name: driver_pod.metadata.name.clone().unwrap_or_default(),
        uid: driver_pod.metadata.uid.clone().unwrap_or_default(),
        controller: Some(true),
        block_owner_deletion: None,
    };
    meta.owner_references
        .get_or_insert_with(Vec::new)
        .push(reference);
}

/// Human-readable multi-line summary of a pod for diagnostic logging.
pub fn format_pod_state(pod: &Pod) -> String {
    const UNKNOWN: &str = "N/A";

    let metadata = &pod.metadata;
    let spec = pod.spec.as_ref();
    let status = pod.status.as_ref();

    let labels = metadata
        .labels
        .as_ref()
        .map(|labels| {
            labels
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| UNKNOWN.to_string());
    let images = spec
        .map(|spec| {
            spec.containers
                .iter()
                .filter_map(|container| container.image.as_deref())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| UNKNOWN.to_string());

    format!(
        "\n\t pod name: {}\
         \n\t namespace: {}\
         \n\t labels: {}\
         \n\t pod uid: {}\
         \n\t creation time: {}\
         \n\t service account name: {}\
         \n\t node name: {}\
         \n\t start time: {}\
         \n\t container images: {}\
         \n\t phase: {}\
         \n\t status message: {}",
        metadata.name.as_deref().unwrap_or(UNKNOWN),
        metadata.namespace.as_deref().unwrap_or(UNKNOWN),
        labels,
        metadata.uid.as_deref().unwrap_or(UNKNOWN),
        metadata
            .creation_timestamp
            .as_ref()
            .map(|time| time.0.to_rfc3339())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        spec.and_then(|spec| spec.service_account_name.as_deref())
            .unwrap_or(UNKNOWN),
        spec.and_then(|spec| spec.node_name.as_deref())
            .unwrap_or(UNKNOWN),
        status
            .and_then(|status| status.start_time.as_ref())
            .map(|time| time.0.to_rfc3339())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        images,
        status
            .and_then(|status| status.phase.as_deref())
            .unwrap_or(UNKNOWN),
        status
            .and_then(|status| status.message.as_deref())
            .unwrap_or(UNKNOWN),
    )
}
