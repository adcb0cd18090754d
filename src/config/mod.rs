//! Config module - path resolution for exports and history

mod paths;

pub use paths::AppPaths;
