use thiserror::Error;

/// A single degree/minute/second component that could not be turned into a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("'{0}' is neither a number nor a numerator/denominator pair")]
    Malformed(String),

    #[error("'{0}' has a zero denominator")]
    ZeroDenominator(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GpsError {
    #[error("{tag} has an unusable component")]
    InvalidComponent {
        tag: String,
        #[source]
        source: RationalError,
    },

    #[error("{tag} must hold degrees, minutes and seconds, found {found} component(s)")]
    WrongComponentCount { tag: String, found: usize },

    #[error("{tag} is not a sequence of coordinate components")]
    NotASequence { tag: String },
}
