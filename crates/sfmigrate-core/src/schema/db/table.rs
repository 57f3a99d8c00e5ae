use super::Column;

/// Receives translated columns.
///
/// Implemented by whatever ends up persisting the schema change. Columns
/// arrive in field declaration order, one call per field.
pub trait AddColumn {
    fn add_column(&mut self, column: Column);
}

/// A database table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns, in the order they were added
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}

impl AddColumn for Table {
    fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }
}

impl<T: AddColumn + ?Sized> AddColumn for &mut T {
    fn add_column(&mut self, column: Column) {
        (**self).add_column(column)
    }
}
