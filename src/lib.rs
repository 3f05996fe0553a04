#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::LayoutConfig;
pub use error::{ConfigError, InputError};
pub use ir::{Edge, KnowledgeItem};
pub use layout::{HeaderPill, Layout, NodePosition, build_layout, compute_layout};
pub use parser::{LayoutInput, parse_document};
