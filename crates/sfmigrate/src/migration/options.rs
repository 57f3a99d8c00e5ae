use serde::Deserialize;

/// Options for [`SObjectMigration::add_sobject`](super::SObjectMigration::add_sobject).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MigrationOptions {
    /// Also emit foreign keys for reference fields.
    ///
    /// Not implemented; requesting it fails the batch.
    pub include_foreign_keys: bool,
}

impl MigrationOptions {
    pub fn include_foreign_keys(mut self, include: bool) -> Self {
        self.include_foreign_keys = include;
        self
    }
}
