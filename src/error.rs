use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Unknown plane rectangular zone: {0}")]
    UnknownZone(i32),

    #[error("Outside projection domain: {0}")]
    Domain(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProjError::UnknownZone(999).to_string(),
            "Unknown plane rectangular zone: 999"
        );
        assert_eq!(
            ProjError::Domain("latitude 90 is a pole".into()).to_string(),
            "Outside projection domain: latitude 90 is a pole"
        );
    }
}
