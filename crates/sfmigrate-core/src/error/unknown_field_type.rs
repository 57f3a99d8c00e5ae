use super::Error;

/// Error when a field declares a type no translation rule handles.
///
/// Carries both the offending type tag and the field name so the schema
/// mapping can be fixed or a rule added. Substituting a default column for an
/// unknown type is never done: a silently misclassified column corrupts the
/// generated schema.
#[derive(Debug)]
pub(super) struct UnknownFieldType {
    ty: Box<str>,
    field: Box<str>,
}

impl std::error::Error for UnknownFieldType {}

impl core::fmt::Display for UnknownFieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown field type: type={:?} field={:?}",
            self.ty, self.field
        )
    }
}

impl Error {
    /// Creates an unknown field type error for field `field` declaring `ty`.
    pub fn unknown_field_type(ty: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownFieldType(UnknownFieldType {
            ty: ty.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown field type error.
    pub fn is_unknown_field_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownFieldType(_))
    }
}
