pub mod classifier;
pub mod cli_args;
pub mod common;
pub mod extractor;
pub mod link_utils;
pub mod pipeline;
pub mod preflight;
pub mod report;
pub mod settings;

pub use classifier::Classifier;
pub use extractor::{Anchor, Document, Rewrite};
pub use settings::UtmSettings;
