use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Invalid port: {0}")]
    InvalidPort(u16),

    #[error("Invalid user info for host '{0}'")]
    InvalidUserInfo(String),

    #[error("URI build failed: {0}")]
    UriBuild(String),
}

impl From<url::ParseError> for ConnectorError {
    fn from(err: url::ParseError) -> Self {
        ConnectorError::UriBuild(err.to_string())
    }
}
