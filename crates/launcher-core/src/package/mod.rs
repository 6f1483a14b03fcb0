pub mod locate;
pub mod validate;

pub use locate::{locate_package, search_roots, PACKAGE_PATH_ENV};
