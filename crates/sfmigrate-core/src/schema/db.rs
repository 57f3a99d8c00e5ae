mod column;
pub use column::{Column, ColumnOptions};

mod table;
pub use table::{AddColumn, Table};

mod ty;
pub use ty::Type;
