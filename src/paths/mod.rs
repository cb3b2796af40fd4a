//! Path resolution for staging roots and canonical save directories.
//!
//! The host application normally knows where its documents and app-data
//! directories live; this module models that as the [`HostPathProvider`]
//! trait so the engine never touches platform lookup directly. The default
//! [`EnvPathProvider`] resolves through the `dirs` crate with environment
//! variable fallbacks, matching the directory conventions of the mod
//! manager this tool rides along with:
//!
//! - staging roots: `<appData>/<titleId>/mods` plus an optional active
//!   install directory
//! - canonical saves: `<documents>/My Games/<Title Display Name>/Saves`

use crate::models::Title;
use camino::{Utf8Component, Utf8PathBuf};
use indexmap::IndexSet;

/// Logical directory roles the engine asks the host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRole {
    /// The user's documents directory.
    Documents,
    /// The mod manager's app-data root (one staging tree per title below it).
    AppData,
    /// The active mod-install directory, when the host exposes one.
    ActiveInstallDir,
}

/// Resolves logical directory roles to absolute paths.
///
/// Returns `None` when the host environment cannot supply the role; the
/// engine treats that as a configuration gap for the affected title, not
/// an error.
pub trait HostPathProvider: Send + Sync {
    fn resolve(&self, role: PathRole) -> Option<Utf8PathBuf>;
}

/// Default provider: platform directories with environment fallbacks.
///
/// `Documents` falls back to the user profile directory; `AppData` falls
/// back to `%APPDATA%/Vortex`; the active install directory comes from
/// `SGI_ACTIVE_INSTALL` when set.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvPathProvider;

impl HostPathProvider for EnvPathProvider {
    fn resolve(&self, role: PathRole) -> Option<Utf8PathBuf> {
        match role {
            PathRole::Documents => dirs::document_dir()
                .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
                .or_else(|| env_path("USERPROFILE"))
                .or_else(|| {
                    dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
                }),
            PathRole::AppData => dirs::config_dir()
                .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
                .or_else(|| env_path("APPDATA"))
                .map(|p| p.join("Vortex")),
            PathRole::ActiveInstallDir => env_path("SGI_ACTIVE_INSTALL"),
        }
    }
}

fn env_path(var: &str) -> Option<Utf8PathBuf> {
    std::env::var(var).ok().filter(|v| !v.is_empty()).map(Utf8PathBuf::from)
}

/// Staging roots for a title, deduplicated by normalized path.
///
/// Order is preserved: the app-data staging tree first, then the active
/// install directory when present and distinct.
pub fn staging_roots(provider: &dyn HostPathProvider, title: Title) -> Vec<Utf8PathBuf> {
    let mut roots: IndexSet<Utf8PathBuf> = IndexSet::new();

    if let Some(app_data) = provider.resolve(PathRole::AppData) {
        roots.insert(normalize(app_data.join(title.id()).join("mods")));
    }
    if let Some(active) = provider.resolve(PathRole::ActiveInstallDir) {
        roots.insert(normalize(active));
    }

    roots.into_iter().collect()
}

/// The canonical save directory for a title, or `None` when the documents
/// directory cannot be resolved.
pub fn saves_dir(provider: &dyn HostPathProvider, title: Title) -> Option<Utf8PathBuf> {
    let docs = provider.resolve(PathRole::Documents)?;
    Some(docs.join("My Games").join(title.display_name()).join("Saves"))
}

/// Lexical normalization: drops `.` components, resolves `..` against the
/// collected prefix, and strips trailing separators. Used only to compare
/// staging-root candidates for dedup; never hits the filesystem.
fn normalize(path: Utf8PathBuf) -> Utf8PathBuf {
    let mut out = Utf8PathBuf::new();
    for comp in path.components() {
        match comp {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_str()),
        }
    }
    out
}
