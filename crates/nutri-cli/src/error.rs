use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] nutri_config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] nutri_core::StorageError),

    #[error("{}", .0.user_message())]
    Session(#[from] nutri_core::SessionError),

    #[error("Backend error: {0}")]
    Client(#[from] nutri_core::ClientError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
