//! Settings and materials loading with version-gated migration.
//!
//! The settings file carries a `Version` marker. When it disagrees with the
//! running version, the file is backed up to `<name>.old`, deleted, recreated
//! from the bundled default, and read again. That happens at most
//! [`MAX_MIGRATIONS`] times per load; a file that is still outdated afterwards
//! leaves the subsystem not ready.

mod materialize;
mod schema;


use crate::{ConfigError, Document, keys};
use durablock_protocol::ResourceProvider;
use log::{debug, error, info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default settings filename in the data directory.
pub const DEFAULT_SETTINGS_FILE: &str = "config.yml";
/// Default materials filename in the data directory.
pub const DEFAULT_MATERIALS_FILE: &str = "materials.yml";
/// Suffix appended to the settings file when it is backed up before migration.
pub const BACKUP_SUFFIX: &str = ".old";
/// Backup-and-retry cycles allowed per load.
pub const MAX_MIGRATIONS: usize = 1;

/// Where the documents live and which version they must carry.
#[derive(Debug, Clone)]
pub struct DurabilityConfigOptions {
    /// Writable directory holding the settings and materials files.
    pub data_dir: PathBuf,
    /// Version string of the running host, compared verbatim with `Version`.
    pub expected_version: String,
    /// Settings filename; also the name of its bundled resource.
    pub settings_file: String,
    /// Materials filename; also the name of its bundled resource.
    pub materials_file: String,
}

impl DurabilityConfigOptions {
    /// Options with the default filenames.
    pub fn new(data_dir: impl AsRef<Path>, expected_version: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            expected_version: expected_version.into(),
            settings_file: DEFAULT_SETTINGS_FILE.to_string(),
            materials_file: DEFAULT_MATERIALS_FILE.to_string(),
        }
    }

    pub fn with_settings_file(mut self, name: impl Into<String>) -> Self {
        self.settings_file = name.into();
        self
    }

    pub fn with_materials_file(mut self, name: impl Into<String>) -> Self {
        self.materials_file = name.into();
        self
    }

    /// Per-user data directory for hosts that do not supply one.
    pub fn default_data_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "durablock")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(&self.settings_file)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}{BACKUP_SUFFIX}", self.settings_file))
    }

    pub fn materials_path(&self) -> PathBuf {
        self.data_dir.join(&self.materials_file)
    }
}

/// Terminal state of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Both documents are loaded.
    Ready,
    /// The settings document has no `Version`; nothing was migrated.
    Unversioned,
    /// The settings document was still outdated after migrating.
    VersionMismatch { found: String, expected: String },
}

/// What a load did and whether the documents can be trusted.
#[derive(Debug)]
pub struct LoadReport {
    pub ready: bool,
    pub status: LoadStatus,
    /// Whether a backup-and-retry cycle ran.
    pub migrated: bool,
    /// Non-fatal settings problems; the affected accessors use defaults.
    pub issues: Vec<ConfigError>,
}

impl LoadReport {
    fn not_ready(status: LoadStatus, migrated: bool) -> Self {
        Self {
            ready: false,
            status,
            migrated,
            issues: Vec::new(),
        }
    }
}

/// Outcome of comparing a document's `Version` with the expected one.
enum VersionCheck {
    Current,
    Outdated(String),
    Unversioned,
}

fn check_version(document: &Document, expected: &str) -> VersionCheck {
    match document.get_opt_string(keys::VERSION) {
        None => VersionCheck::Unversioned,
        Some(found) if found == expected => VersionCheck::Current,
        Some(found) => VersionCheck::Outdated(found),
    }
}

/// The configuration subsystem: live documents, snapshot, and load state.
///
/// One instance is created by the host and handed to whatever needs it. All
/// mutation goes through `&mut self`, so concurrent reloads must be
/// serialized by the owner.
pub struct DurabilityConfig {
    options: DurabilityConfigOptions,
    resources: Box<dyn ResourceProvider>,
    pub(crate) settings: Option<Arc<Document>>,
    pub(crate) materials: Option<Arc<Document>>,
    pub(crate) snapshot: Option<crate::snapshot::Snapshot>,
    loaded: bool,
}

impl fmt::Debug for DurabilityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DurabilityConfig")
            .field("options", &self.options)
            .field("loaded", &self.loaded)
            .field("has_settings", &self.settings.is_some())
            .field("has_materials", &self.materials.is_some())
            .field("has_snapshot", &self.snapshot.is_some())
            .finish()
    }
}

impl DurabilityConfig {
    /// Create an unloaded subsystem. Call [`DurabilityConfig::load`] next.
    pub fn new(
        options: DurabilityConfigOptions,
        resources: impl ResourceProvider + 'static,
    ) -> Self {
        Self {
            options,
            resources: Box::new(resources),
            settings: None,
            materials: None,
            snapshot: None,
            loaded: false,
        }
    }

    pub fn options(&self) -> &DurabilityConfigOptions {
        &self.options
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn settings_document(&self) -> Option<&Document> {
        self.settings.as_deref()
    }

    pub fn materials_document(&self) -> Option<&Document> {
        self.materials.as_deref()
    }

    /// Swap in a new settings document wholesale.
    pub fn replace_settings(&mut self, document: Document) {
        self.settings = Some(Arc::new(document));
    }

    /// Swap in a new materials document wholesale.
    pub fn replace_materials(&mut self, document: Document) {
        self.materials = Some(Arc::new(document));
    }

    /// Load both documents, migrating an outdated settings file once.
    pub fn load(&mut self) -> LoadReport {
        self.loaded = false;
        let data_dir = self.options.data_dir.clone();
        if let Err(err) = fs::create_dir_all(&data_dir) {
            error!(
                "failed to create data directory (path={}): {err}",
                data_dir.display()
            );
        }

        let settings_path = self.options.settings_path();
        let mut migrations = 0;
        let settings = loop {
            let document =
                Arc::new(self.read_or_create(&settings_path, &self.options.settings_file));
            self.settings = Some(Arc::clone(&document));

            match check_version(&document, &self.options.expected_version) {
                VersionCheck::Current => break document,
                VersionCheck::Unversioned => {
                    warn!(
                        "settings file has no {} marker; not loading (path={})",
                        keys::VERSION,
                        settings_path.display()
                    );
                    return LoadReport::not_ready(LoadStatus::Unversioned, migrations > 0);
                }
                VersionCheck::Outdated(found) if migrations >= MAX_MIGRATIONS => {
                    error!(
                        "loading failed on update check; aborting (found={found}, expected={})",
                        self.options.expected_version
                    );
                    return LoadReport::not_ready(
                        LoadStatus::VersionMismatch {
                            found,
                            expected: self.options.expected_version.clone(),
                        },
                        true,
                    );
                }
                VersionCheck::Outdated(found) => {
                    warn!(
                        "settings file outdated, backing up old (found={found}, expected={})",
                        self.options.expected_version
                    );
                    self.migrate(&document, &settings_path);
                    migrations += 1;
                }
            }
        };

        let issues = schema::lint_settings(&settings);
        for issue in &issues {
            warn!("{issue}");
        }

        let materials_path = self.options.materials_path();
        let materials = self.read_or_create(&materials_path, &self.options.materials_file);
        self.materials = Some(Arc::new(materials));
        self.loaded = true;
        info!(
            "durability config loaded (data_dir={}, migrated={})",
            data_dir.display(),
            migrations > 0
        );

        LoadReport {
            ready: true,
            status: LoadStatus::Ready,
            migrated: migrations > 0,
            issues,
        }
    }

    /// Drop the loaded state and load again from disk.
    pub fn reload(&mut self) -> LoadReport {
        self.loaded = false;
        self.load()
    }

    /// Reload, restoring the previous documents if the reload is not ready.
    /// A snapshot taken by the caller survives either way.
    pub fn try_reload(&mut self) -> LoadReport {
        let was_loaded = self.loaded;
        let caller_snapshot = self.snapshot.take();
        self.backup();
        let report = self.reload();
        if !report.ready {
            warn!(
                "reload failed; restoring previous documents (status={:?})",
                report.status
            );
            self.restore();
            self.loaded = was_loaded;
        }
        self.snapshot = caller_snapshot;
        report
    }

    /// Parse `path`, creating it from the bundled resource first if missing.
    fn read_or_create(&self, path: &Path, resource: &str) -> Document {
        if path.exists() {
            debug!("loading {resource} file (path={})", path.display());
        } else {
            debug!("creating {resource} file (path={})", path.display());
            if let Err(err) = materialize::materialize(path, resource, &*self.resources) {
                error!(
                    "failed to create file from resource (resource={resource}, path={}): {err}",
                    path.display()
                );
            }
        }
        Document::load_or_empty(path)
    }

    /// Save the outdated document beside the original, then delete the original.
    fn migrate(&mut self, outdated: &Document, path: &Path) {
        let backup_path = self.options.backup_path();
        if let Err(err) = outdated.save(&backup_path) {
            self.loaded = false;
            error!(
                "failed to back up outdated settings (path={}): {err}",
                backup_path.display()
            );
        }
        if let Err(err) = fs::remove_file(path) {
            warn!(
                "failed to remove outdated settings (path={}): {err}",
                path.display()
            );
        }
    }
}
