//! Image assets referenced by views, prepared up front so layout and paint do no IO.

pub(crate) mod decode;
pub(crate) mod store;

pub use store::{AssetStore, PreparedImage};
