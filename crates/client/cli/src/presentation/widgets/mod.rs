pub mod grid;
pub mod mousemap;
pub mod results;
pub mod status;
