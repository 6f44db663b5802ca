pub mod alpha_bleed;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ico;
pub mod manifest;
pub mod mcp;
pub mod pipeline;
pub mod raster;
pub mod source;
pub mod tools;
pub mod writer;

pub use error::{FaviconError, Result};
pub use pipeline::create_favicon_set;
pub use tools::FaviconTools;
pub use writer::{OutputBundle, APPLE_SIZES, FAVICON_SIZES, ICO_SIZES};
