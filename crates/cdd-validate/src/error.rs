use thiserror::Error;

/// Errors raised when a table does not satisfy its required schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{source_label} is missing the following required columns: {}", quoted(.columns))]
    MissingRequiredColumns {
        source_label: String,
        columns: Vec<String>,
    },
}

fn quoted(columns: &[String]) -> String {
    let names: Vec<String> = columns.iter().map(|c| format!("'{c}'")).collect();
    format!("[{}]", names.join(", "))
}

pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_enumerates_every_column() {
        let err = ValidationError::MissingRequiredColumns {
            source_label: "Input file 2".into(),
            columns: vec!["SMILES".into(), "RLA_Number".into()],
        };
        assert_eq!(
            err.to_string(),
            "Input file 2 is missing the following required columns: ['SMILES', 'RLA_Number']"
        );
    }
}
