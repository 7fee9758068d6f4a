use thiserror::Error;

use crate::phrases::Category;

/// The central error type for roastgen.
///
/// Selection itself cannot fail once a `Category` exists; everything here is
/// either an integration mistake (bad index, broken table) or an ambient
/// failure (config file, stdout).
#[derive(Error, Debug)]
pub enum RoastError {
    #[error("Invalid category {index}: expected 1..={max}", max = Category::ALL.len())]
    InvalidCategory { index: usize },

    #[error("Category {category} ({variant}) has no phrases", variant = variant_name(.filtered))]
    EmptyCategory { category: Category, filtered: bool },

    #[error("Category {category} is missing its {variant} phrase list", variant = variant_name(.filtered))]
    MissingVariant { category: Category, filtered: bool },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn variant_name(filtered: &bool) -> &'static str {
    if *filtered {
        "filtered"
    } else {
        "unfiltered"
    }
}

pub type Result<T> = std::result::Result<T, RoastError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_INVALID_CATEGORY: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<RoastError>() {
        Some(RoastError::InvalidCategory { .. }) => EXIT_INVALID_CATEGORY,
        Some(RoastError::Config(_)) => EXIT_CONFIG_ERROR,
        _ => EXIT_ERROR,
    }
}

/// True when the error is a closed stdout pipe (`roastgen | head -1`).
pub fn is_broken_pipe(e: &anyhow::Error) -> bool {
    let io = match e.downcast_ref::<RoastError>() {
        Some(RoastError::Output(io)) => Some(io),
        _ => e.downcast_ref::<std::io::Error>(),
    };
    io.is_some_and(|io| io.kind() == std::io::ErrorKind::BrokenPipe)
}
