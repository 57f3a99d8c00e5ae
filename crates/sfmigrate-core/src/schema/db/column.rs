use super::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The database storage type of the column.
    pub ty: Type,

    /// Size and constraint options passed along with the type.
    pub options: ColumnOptions,
}

/// Options attached to a column definition.
///
/// Unset sizes are left for the migration builder to default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    /// Maximum character length for strings, integer digits for decimals.
    pub length: Option<u32>,

    /// Number of digits after the decimal point.
    pub fractional: Option<u32>,

    /// Whether the column carries a unique constraint
    pub unique: bool,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// Whether the column should be indexed
    pub index: bool,
}

impl Column {
    /// Creates a nullable column with no size or constraint options.
    pub fn new(name: impl Into<String>, ty: Type) -> Column {
        Column {
            name: name.into(),
            ty,
            options: ColumnOptions {
                nullable: true,
                ..ColumnOptions::default()
            },
        }
    }

    pub fn length(mut self, length: u32) -> Self {
        self.options.length = Some(length);
        self
    }

    pub fn fractional(mut self, fractional: u32) -> Self {
        self.options.fractional = Some(fractional);
        self
    }

    pub fn unique(mut self) -> Self {
        self.options.unique = true;
        self
    }

    pub fn index(mut self) -> Self {
        self.options.index = true;
        self
    }

    pub fn set_unique(&mut self, unique: bool) {
        self.options.unique = unique;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
