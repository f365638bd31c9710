use std::env;
use std::path::Path;
use std::path::PathBuf;

use url::Url;

/// Scheme marking a file as already present on the remote execution hosts.
const LOCAL_SCHEME: &str = "local";

/// Scheme for files on the submission client's own filesystem, also the
/// default when a reference carries no scheme at all.
const FILE_SCHEME: &str = "file";

/// Normalize a `local://` file reference to its bare filesystem path.
///
/// Files carrying the `local` scheme are already present on the remote
/// execution hosts and must not be re-staged, so only their path survives.
/// Every other scheme, including the implicit default `file`, is returned
/// unchanged so upstream staging keeps its semantics.
pub fn resolve_file_uri(uri: &str) -> String {
    match Url::parse(uri) {
        Ok(url) if url.scheme() == LOCAL_SCHEME => url.path().to_string(),
        _ => uri.to_string(),
    }
}

/// Filter file references down to those on the submission client's
/// filesystem, mapped to absolute paths.
///
/// Input order is preserved for retained entries. References with any other
/// scheme are dropped silently; their absence is the signal, not a fault.
pub fn submitter_local_files<'a, I>(uris: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    uris.into_iter().filter_map(submitter_local_path).collect()
}

fn submitter_local_path(uri: &str) -> Option<String> {
    let path = match Url::parse(uri) {
        Ok(url) if url.scheme() == FILE_SCHEME => PathBuf::from(url.path()),
        Ok(_) => return None,
        // A bare path has no scheme and resolves to the local filesystem.
        Err(_) => PathBuf::from(uri),
    };
    Some(absolute(&path))
}

fn absolute(path: &Path) -> String {
    if path.is_absolute() {
        path.display().to_string()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_scheme_resolves_to_bare_path() {
        assert_eq!(resolve_file_uri("local:///opt/data.jar"), "/opt/data.jar");
        assert_eq!(resolve_file_uri("local:/opt/data.jar"), "/opt/data.jar");
    }

    #[test]
    fn other_schemes_pass_through_unchanged() {
        assert_eq!(resolve_file_uri("/tmp/a.jar"), "/tmp/a.jar");
        assert_eq!(resolve_file_uri("file:///tmp/a.jar"), "file:///tmp/a.jar");
        assert_eq!(
            resolve_file_uri("http://host/a.jar"),
            "http://host/a.jar"
        );
        assert_eq!(
            resolve_file_uri("hdfs://nn:8020/a.jar"),
            "hdfs://nn:8020/a.jar"
        );
    }

    #[test]
    fn filtering_keeps_file_scheme_entries_in_order() {
        let uris = [
            "/opt/app/a.jar",
            "http://host/b.jar",
            "file:///tmp/c.jar",
            "local:///remote/d.jar",
            "/var/lib/e.jar",
        ];

        let local = submitter_local_files(uris);

        assert_eq!(local, vec!["/opt/app/a.jar", "/tmp/c.jar", "/var/lib/e.jar"]);
    }

    #[test]
    fn filtering_drops_everything_non_local() {
        let uris = ["http://host/a.jar", "local:///opt/b.jar"];

        assert!(submitter_local_files(uris).is_empty());
    }

    #[test]
    fn relative_paths_become_absolute() {
        let local = submitter_local_files(["data/app.jar"]);

        assert_eq!(local.len(), 1);
        assert!(Path::new(&local[0]).is_absolute());
        assert!(local[0].ends_with("data/app.jar"));
    }
}
