pub mod directives;
pub mod loader;
pub mod parser;

pub use directives::{AnalyzerConfig, AnalyzerConfigBuilder, Directive, SiteEntry};
pub use loader::{ConfigLoader, ConfigLoaderBuilder};
pub use parser::ConfigParser;
