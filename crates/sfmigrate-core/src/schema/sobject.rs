mod field;
pub use field::Field;

mod object;
pub use object::SObject;
