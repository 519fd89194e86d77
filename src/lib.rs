pub mod array;
pub mod dimensions;
pub mod header;
pub mod logo;
pub mod paths;
