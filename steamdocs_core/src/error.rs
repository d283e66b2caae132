use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExplorerError {
    #[error("schema parse: {0}")]
    SchemaParse(#[source] serde_json::Error),

    #[error("unknown method: {interface}/{method}")]
    UnknownMethod { interface: String, method: String },

    #[error("encode structured payload: {0}")]
    PayloadEncode(#[source] serde_json::Error),

    #[error("token: {0}")]
    Token(#[from] TokenError),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TokenError {
    #[error("expected three dot-separated JWT segments")]
    NotAJwt,

    #[error("payload is not valid base64url: {0}")]
    PayloadEncoding(#[from] base64::DecodeError),

    #[error("claims: {0}")]
    Claims(#[from] serde_json::Error),
}
