use pretty_assertions::assert_eq;
use sfmigrate::{MigrationOptions, SObjectMigration};
use sfmigrate_core::schema::{
    db::{AddColumn, Type},
    Column, Field, SObject, Table,
};

/// Records every `add_column` call.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Column>,
}

impl AddColumn for Recorder {
    fn add_column(&mut self, column: Column) {
        self.calls.push(column);
    }
}

fn account() -> SObject {
    SObject::new(
        "Account",
        vec![
            Field::new("Id", "id").with_length(18),
            Field::new("Name", "string").with_length(255),
            Field::new("ParentId", "reference").with_length(18),
            Field::new("AccountNumber__c", "string")
                .with_length(40)
                .with_unique(true),
            Field::new("Description", "textarea").with_byte_length(96_000),
            Field::new("NumberOfEmployees", "int").with_digits(8),
        ],
    )
}

#[test]
fn columns_follow_field_order() {
    let mut migration = SObjectMigration::new("accounts");
    migration
        .add_sobject(&account(), &MigrationOptions::default())
        .unwrap();

    let table = migration.into_table();
    assert_eq!(table.name, "accounts");
    assert_eq!(
        table.columns,
        vec![
            Column::new("id", Type::String).length(18).unique(),
            Column::new("name", Type::String).length(255),
            Column::new("parentid", Type::String).length(18).index(),
            Column::new("accountnumber__c", Type::String).length(40).unique(),
            Column::new("description", Type::MediumText),
            Column::new("numberofemployees", Type::Integer),
        ]
    );
}

#[test]
fn source_uniqueness_is_forced() {
    let sobject = SObject::new(
        "Contact",
        vec![
            Field::new("Email", "email").with_length(80).with_unique(true),
            Field::new("Notes__c", "textarea")
                .with_byte_length(765)
                .with_unique(true),
        ],
    );

    let mut migration = SObjectMigration::new("contacts");
    migration
        .add_sobject(&sobject, &MigrationOptions::default())
        .unwrap();

    for column in &migration.table().columns {
        assert!(column.options.unique, "column={}", column.name);
        assert!(column.options.nullable, "column={}", column.name);
    }
}

#[test]
fn empty_sobject_adds_nothing() {
    let mut migration = SObjectMigration::with_table(Recorder::default());
    migration
        .add_sobject(&SObject::new("Empty", vec![]), &MigrationOptions::default())
        .unwrap();

    assert!(migration.table().calls.is_empty());
}

#[test]
fn empty_sobject_ignores_foreign_key_option() {
    let mut migration = SObjectMigration::with_table(Recorder::default());
    let options = MigrationOptions::default().include_foreign_keys(true);

    assert!(migration
        .add_sobject(&SObject::new("Empty", vec![]), &options)
        .is_ok());
}

#[test]
fn foreign_keys_are_rejected_before_any_column() {
    let mut migration = SObjectMigration::with_table(Recorder::default());
    let options = MigrationOptions::default().include_foreign_keys(true);

    let err = migration.add_sobject(&account(), &options).unwrap_err();

    assert!(err.is_unsupported_feature());
    assert!(err.to_string().contains("foreign keys"));
    assert!(migration.table().calls.is_empty());
}

#[test]
fn unknown_type_adds_nothing() {
    let mut sobject = account();
    sobject
        .fields
        .insert(3, Field::new("HQ__c", "geolocation"));

    let mut migration = SObjectMigration::with_table(Recorder::default());
    let err = migration
        .add_sobject(&sobject, &MigrationOptions::default())
        .unwrap_err();

    assert!(err.is_unknown_field_type());
    assert!(err.to_string().contains("HQ__c"));
    assert!(migration.table().calls.is_empty());
}

#[test]
fn borrowed_table_receives_columns() {
    let mut table = Table::new("accounts");

    SObjectMigration::with_table(&mut table)
        .add_sobject(&account(), &MigrationOptions::default())
        .unwrap();

    assert_eq!(table.columns.len(), 6);
    assert_eq!(
        table.column("description").map(|column| column.ty),
        Some(Type::MediumText)
    );
}

#[test]
fn sobjects_accumulate() {
    let contact = SObject::new("Contact", vec![Field::new("Birthdate", "date")]);

    let mut migration = SObjectMigration::with_table(Recorder::default());
    migration
        .add_sobject(&account(), &MigrationOptions::default())
        .unwrap()
        .add_sobject(&contact, &MigrationOptions::default())
        .unwrap();

    let names: Vec<_> = migration
        .table()
        .calls
        .iter()
        .map(|column| column.name.as_str())
        .collect();
    assert_eq!(names.len(), 7);
    assert_eq!(names.last(), Some(&"birthdate"));
}

#[test]
fn describe_document_end_to_end() {
    let sobject = SObject::from_json(
        r#"{
            "name": "Opportunity",
            "label": "Opportunity",
            "fields": [
                {"name": "Id", "type": "id", "length": 18, "byteLength": 18, "unique": false},
                {"name": "Amount", "type": "currency", "precision": 18, "scale": 2, "length": 0},
                {"name": "Probability", "type": "percent", "precision": 3, "scale": 0},
                {"name": "StageName", "type": "picklist", "length": 255},
                {"name": "CloseDate", "type": "date", "digits": 0},
                {"name": "IsWon", "type": "boolean", "nillable": false}
            ]
        }"#,
    )
    .unwrap();

    let mut migration = SObjectMigration::new("opportunities");
    migration
        .add_sobject(&sobject, &MigrationOptions::default())
        .unwrap();

    assert_eq!(
        migration.into_table().columns,
        vec![
            Column::new("id", Type::String).length(18).unique(),
            Column::new("amount", Type::Decimal).length(16).fractional(2),
            Column::new("probability", Type::Decimal).length(3).fractional(0),
            Column::new("stagename", Type::String).length(255),
            Column::new("closedate", Type::Date),
            Column::new("iswon", Type::Boolean),
        ]
    );
}

#[test]
fn options_from_config() {
    let options: MigrationOptions = serde_json::from_str(r#"{"include_foreign_keys": true}"#).unwrap();
    assert!(options.include_foreign_keys);

    let options: MigrationOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, MigrationOptions::default());
}
