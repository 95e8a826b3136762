use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Recipe(#[from] recipes::RecipeError),

    #[error(transparent)]
    Scale(#[from] modscale::ScaleError),

    #[error("Could not install logger: {0}")]
    Logger(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
