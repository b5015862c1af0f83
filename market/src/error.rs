use std::fmt::{Display, Formatter};

use checklist::DataError;

#[derive(Debug)]
pub enum SourceError {
    InvalidDatetime(String),
    Io(std::io::Error),
    Csv(csv::Error),
    Data(DataError),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDatetime(v) => write!(f, "invalid datetime: {v}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Csv(e) => write!(f, "csv error: {e}"),
            Self::Data(e) => write!(f, "data error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for SourceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<DataError> for SourceError {
    fn from(value: DataError) -> Self {
        Self::Data(value)
    }
}
