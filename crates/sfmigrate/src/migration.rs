mod options;
pub use options::MigrationOptions;

use crate::RuleSet;

use sfmigrate_core::{
    schema::{db::AddColumn, Column, SObject, Table},
    Error, Result,
};
use tracing::{debug, warn};

/// Builds a table's columns from SObject describe metadata.
///
/// The table is any [`AddColumn`] implementation; by default an in-memory
/// [`Table`].
#[derive(Debug)]
pub struct SObjectMigration<T = Table> {
    table: T,
    rules: RuleSet,
}

impl SObjectMigration<Table> {
    /// Creates a migration for a new, empty table named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_table(Table::new(name))
    }
}

impl<T: AddColumn> SObjectMigration<T> {
    pub fn with_table(table: T) -> Self {
        Self::with_rules(table, RuleSet::default())
    }

    pub fn with_rules(table: T, rules: RuleSet) -> Self {
        Self { table, rules }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn into_table(self) -> T {
        self.table
    }

    /// Translates every field of `sobject` and adds the columns to the table
    /// in field declaration order.
    ///
    /// An SObject without fields leaves the table untouched. Otherwise the
    /// table receives either all of the columns or none of them: every field
    /// is translated before the first column is added, and requesting foreign
    /// keys is rejected up front.
    pub fn add_sobject(
        &mut self,
        sobject: &SObject,
        options: &MigrationOptions,
    ) -> Result<&mut Self> {
        if sobject.fields.is_empty() {
            debug!(sobject = %sobject.name, "SObject has no fields; nothing to add");
            return Ok(self);
        }

        if options.include_foreign_keys {
            warn!(sobject = %sobject.name, "foreign key inclusion requested");
            return Err(Error::unsupported_feature(
                "including foreign keys is intentionally not implemented",
            ));
        }

        let columns = self.translate_sobject(sobject)?;

        debug!(
            sobject = %sobject.name,
            columns = columns.len(),
            "adding SObject columns"
        );

        for column in columns {
            self.table.add_column(column);
        }

        Ok(self)
    }

    fn translate_sobject(&self, sobject: &SObject) -> Result<Vec<Column>> {
        sobject
            .fields
            .iter()
            .map(|field| {
                let mut column = self.rules.translate_field(field)?;

                if field.unique {
                    column.set_unique(true);
                }

                column.set_name(column.name.to_lowercase());
                Ok(column)
            })
            .collect()
    }
}
