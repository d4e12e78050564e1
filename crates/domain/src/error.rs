#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no data")]
    NoData,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug must not be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoData),
            ReadError::Storage(StorageError::NoData)
        ));
        assert!(matches!(
            ReadError::from(Box::<dyn std::error::Error>::from("foo")),
            ReadError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_slug_error_display() {
        assert_eq!(SlugError::Empty.to_string(), "Slug must not be empty");
    }
}
