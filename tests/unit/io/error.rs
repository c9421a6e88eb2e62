//! Tests for error formatting, sources and classification

#[cfg(test)]
mod tests {
    use circuitgrow::io::error::{CircuitError, file_system_error, invalid_parameter};
    use std::error::Error;
    use std::io;

    // Tests malformed table messages name the table, sample and total
    // Verified by omitting the sample from the message
    #[test]
    fn test_malformed_table_display() {
        let error = CircuitError::MalformedTable {
            table: "move",
            sample: 0.75,
            total: 0.5,
        };
        let message = error.to_string();

        assert!(message.contains("'move'"));
        assert!(message.contains("0.75"));
        assert!(message.contains("0.5"));
        assert!(error.is_configuration_error());
        assert!(error.source().is_none());
    }

    // Tests the split strategy error quotes the offending label
    // Verified by printing the label without quotes
    #[test]
    fn test_invalid_split_strategy_display() {
        let error = CircuitError::InvalidSplitStrategy {
            label: "split-4".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid splitting strategy \"split-4\"");
        assert!(error.is_configuration_error());
    }

    // Tests the parameter helper stringifies value and reason
    // Verified by swapping value and reason
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("cell_size", &0, &"must be positive");

        match &error {
            CircuitError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(*parameter, "cell_size");
                assert_eq!(value, "0");
                assert_eq!(reason, "must be positive");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'cell_size' = '0': must be positive"
        );
    }

    // Tests file system errors keep the path and expose the I/O source
    // Verified by returning None from source
    #[test]
    fn test_file_system_error_source() {
        let error = file_system_error(
            "out/circuit.png",
            "create file",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(error.to_string().contains("create file"));
        assert!(error.to_string().contains("out/circuit.png"));
        assert!(error.source().is_some());
        assert!(!error.is_configuration_error());
    }

    // Tests output failures are not reported as configuration errors
    // Verified by classifying every variant as configuration
    #[test]
    fn test_nothing_to_render_classification() {
        let error = CircuitError::NothingToRender {
            reason: "empty".to_string(),
        };

        assert_eq!(error.to_string(), "Nothing to render: empty");
        assert!(!error.is_configuration_error());
    }
}
