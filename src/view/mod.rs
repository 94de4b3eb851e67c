pub(crate) mod color;
pub mod dsl;
pub(crate) mod font;
pub(crate) mod model;
