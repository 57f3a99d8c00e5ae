use pretty_assertions::assert_eq;
use sfmigrate::RuleSet;
use sfmigrate_core::schema::{db::Type, Column, Field};

fn translate(field: Field) -> Column {
    RuleSet::default().translate_field(&field).unwrap()
}

#[test]
fn id_is_unique_18_char_string() {
    for length in [0, 18, 255] {
        assert_eq!(
            translate(Field::new("Id", "id").with_length(length)),
            Column::new("Id", Type::String).length(18).unique()
        );
    }
}

#[test]
fn reference_is_indexed_18_char_string() {
    let column = translate(Field::new("OwnerId", "reference").with_length(18));

    assert_eq!(column, Column::new("OwnerId", Type::String).length(18).index());
    assert!(!column.options.unique);
}

#[test]
fn time_is_formatted_string() {
    assert_eq!(
        translate(Field::new("Opens__c", "time")),
        Column::new("Opens__c", Type::String).length(16)
    );
}

#[test]
fn sizeless_types() {
    assert_eq!(translate(Field::new("IsDeleted", "boolean")).ty, Type::Boolean);
    assert_eq!(translate(Field::new("CloseDate", "date")).ty, Type::Date);
    assert_eq!(translate(Field::new("CreatedDate", "datetime")).ty, Type::DateTime);

    for ty in ["boolean", "date", "datetime"] {
        let column = translate(Field::new("F", ty).with_length(99));
        assert_eq!(column.options.length, None, "ty={ty}");
    }
}

#[test]
fn rules_do_not_rename() {
    let column = translate(Field::new("MixedCase__c", "boolean"));
    assert_eq!(column.name, "MixedCase__c");
}
