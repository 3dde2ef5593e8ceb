pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod render;
pub mod scene;

pub use config::FolioConfig;
pub use content::Portfolio;
pub use error::{FolioError, Result};
