#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MountError {
    #[error("Page has no body")]
    MissingBody,

    #[error("Required element `{0}` is missing")]
    MissingElement(String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage is unavailable")]
    Unavailable,

    #[error("Storage rejected `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

#[derive(thiserror::Error, Debug)]
pub enum ConfError {
    #[error("Malformed page configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}
