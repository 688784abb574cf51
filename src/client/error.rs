use thiserror::Error;

/// Errors raised while talking to the API or the user
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request could not be sent or its response not read
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Reading from or writing to the console failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Invalid API URL {0}")]
    InvalidUrl(String),
    /// A resource lacks the control needed for the requested action
    #[error("The API did not offer a '{0}' control")]
    MissingControl(String),
    #[error("The API offered a control with an unknown method '{0}'")]
    InvalidControl(String),
    /// The API answered with an error envelope
    #[error("{status}: {message}")]
    Api {
        status: u16,
        message: String,
        details: Vec<String>,
    },
    /// The console input reached end of file
    #[error("Input closed")]
    InputClosed,
}
