//! Translates SObject describe metadata into relational column definitions.
//!
//! Each field type tag is resolved to a [`Rule`] through a [`RuleSet`]; the
//! rule turns the field into a [`Column`](sfmigrate_core::schema::Column).
//! [`SObjectMigration`] applies this to every field of an SObject and hands
//! the columns to a table.
//!
//! ```
//! use sfmigrate::{MigrationOptions, SObjectMigration};
//! use sfmigrate_core::schema::{db::Type, Field, SObject};
//!
//! let account = SObject::new(
//!     "Account",
//!     vec![
//!         Field::new("Id", "id"),
//!         Field::new("Name", "string").with_length(255),
//!         Field::new("AnnualRevenue", "currency").with_precision(18).with_scale(2),
//!     ],
//! );
//!
//! let mut migration = SObjectMigration::new("accounts");
//! migration.add_sobject(&account, &MigrationOptions::default())?;
//!
//! let table = migration.into_table();
//! assert_eq!(table.columns[2].name, "annualrevenue");
//! assert_eq!(table.columns[2].ty, Type::Decimal);
//! # Ok::<(), sfmigrate_core::Error>(())
//! ```

mod migration;
pub use migration::{MigrationOptions, SObjectMigration};

mod resolve;
pub use resolve::RuleKey;

mod rule;
pub use rule::{Rule, RuleSet};

mod verify;
