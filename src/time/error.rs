use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("{tag} value '{value}' does not match the EXIF datetime format YYYY:MM:DD HH:MM:SS")]
    MalformedDateTime { tag: String, value: String },

    #[error("'{0}' is not a usable date display format")]
    InvalidDisplayFormat(String),
}
