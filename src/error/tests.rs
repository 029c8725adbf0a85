//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod scan_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let scan_error = ScanError::from(reqwest_error);

        match scan_error {
            ScanError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_status_error_message() {
        let error = ScanError::Status {
            id: TeamId::new(42),
            status: 404,
        };

        assert_eq!(error.to_string(), "status code is 404, id 42");
        assert!(error.is_per_id());
        assert!(error.is_not_found());
    }

    #[test]
    fn test_server_error_is_not_not_found() {
        let error = ScanError::Status {
            id: TeamId::new(42),
            status: 503,
        };

        assert!(error.is_per_id());
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_decode_error_is_per_id() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = ScanError::Decode {
            id: TeamId::new(7),
            source: json_error,
        };

        assert!(error.is_per_id());
        assert!(!error.is_not_found());
        assert!(error.to_string().contains("failed to decode team 7"));

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_missing_max_id_error() {
        let error = ScanError::MissingMaxId {
            env_var: "ROSTER_SCAN_MAX_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("ID upper bound not provided"));
        assert!(error_string.contains("ROSTER_SCAN_MAX_ID"));
        assert!(!error.is_per_id());
    }

    #[test]
    fn test_invalid_max_id_error() {
        let error = ScanError::InvalidMaxId {
            value: "abc".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "ID upper bound must be a positive integer, got \"abc\""
        );
    }

    #[test]
    fn test_invalid_workers_error() {
        let error = ScanError::InvalidWorkers {
            value: "0".to_string(),
        };

        assert!(error.to_string().contains("worker count"));
        assert!(!error.is_per_id());
    }

    #[test]
    fn test_empty_watch_list_error() {
        let error = ScanError::EmptyWatchList;
        assert_eq!(error.to_string(), "watch-list is empty");
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = ScanError::EmptyWatchList;
        let debug_string = format!("{:?}", error);
        assert_eq!(debug_string, "EmptyWatchList");
    }

    #[tokio::test]
    async fn test_join_error_conversion() {
        let handle = tokio::spawn(async {
            panic!("worker exploded");
        });
        let join_error = handle.await.unwrap_err();
        let error = ScanError::from(join_error);

        match error {
            ScanError::WorkerPanicked { .. } => (),
            _ => panic!("Expected WorkerPanicked error variant"),
        }
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(ScanError::EmptyWatchList)
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            ScanError::EmptyWatchList => (),
            _ => panic!("Expected EmptyWatchList error"),
        }
    }
}
