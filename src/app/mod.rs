use thiserror::Error;

/// User-facing failures of the annotate/export workflow. All are
/// deterministic for a given session state; nothing is retried.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("no image loaded")]
    NoImage,

    #[error("required field '{0}' is empty")]
    MissingField(&'static str),

    #[error(transparent)]
    Load(#[from] crate::input::LoadError),

    #[error("failed to save image: {0}")]
    Save(#[from] image::ImageError),
}

pub mod cli;
pub mod export;
pub mod session;

pub use cli::run;
pub use export::{export_filename, export_session, sanitize_filename};
pub use session::Session;
