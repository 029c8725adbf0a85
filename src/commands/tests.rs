//! Unit tests for command configuration resolution

use super::*;
use serial_test::serial;

#[cfg(test)]
mod resolve_tests {
    use super::*;

    fn clear_env() {
        std::env::remove_var(MAX_ID_ENV_VAR);
        std::env::remove_var(WORKERS_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_resolve_max_id_from_option() {
        clear_env();
        let max_id = resolve_max_id(MaxId::new(250)).unwrap();
        assert_eq!(max_id.as_u32(), 250);
    }

    #[test]
    #[serial]
    fn test_resolve_max_id_from_env() {
        clear_env();
        std::env::set_var(MAX_ID_ENV_VAR, "9999");

        let max_id = resolve_max_id(None).unwrap();
        assert_eq!(max_id.as_u32(), 9999);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_resolve_max_id_option_overrides_env() {
        clear_env();
        std::env::set_var(MAX_ID_ENV_VAR, "9999");

        let max_id = resolve_max_id(MaxId::new(10)).unwrap();
        assert_eq!(max_id.as_u32(), 10);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_resolve_max_id_missing() {
        clear_env();

        match resolve_max_id(None).unwrap_err() {
            ScanError::MissingMaxId { env_var } => assert_eq!(env_var, MAX_ID_ENV_VAR),
            other => panic!("Expected MissingMaxId error, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_resolve_max_id_invalid_env() {
        clear_env();
        std::env::set_var(MAX_ID_ENV_VAR, "not_a_number");

        assert!(matches!(
            resolve_max_id(None),
            Err(ScanError::InvalidMaxId { .. })
        ));

        std::env::set_var(MAX_ID_ENV_VAR, "0");
        assert!(matches!(
            resolve_max_id(None),
            Err(ScanError::InvalidMaxId { .. })
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_resolve_workers_missing_and_invalid() {
        clear_env();
        assert!(matches!(
            resolve_workers(None),
            Err(ScanError::MissingWorkers { .. })
        ));

        std::env::set_var(WORKERS_ENV_VAR, "many");
        assert!(matches!(
            resolve_workers(None),
            Err(ScanError::InvalidWorkers { .. })
        ));

        std::env::set_var(WORKERS_ENV_VAR, "6");
        assert_eq!(resolve_workers(None).unwrap().get(), 6);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_early_stop_ignores_missing_workers() {
        clear_env();

        let config = resolve_scan_config(ModeArg::EarlyStop, MaxId::new(100), None).unwrap();
        assert_eq!(config.mode, ScanMode::EarlyStop);
        assert_eq!(config.max_id.as_u32(), 100);
    }

    #[test]
    #[serial]
    fn test_fan_out_requires_workers() {
        clear_env();

        assert!(matches!(
            resolve_scan_config(ModeArg::FanOut, MaxId::new(100), None),
            Err(ScanError::MissingWorkers { .. })
        ));

        let config =
            resolve_scan_config(ModeArg::FanOut, MaxId::new(100), WorkerCount::new(4)).unwrap();
        assert_eq!(
            config.mode,
            ScanMode::FanOut {
                workers: WorkerCount::new(4).unwrap()
            }
        );
    }

    #[test]
    #[serial]
    fn test_missing_max_id_checked_before_workers() {
        clear_env();

        assert!(matches!(
            resolve_scan_config(ModeArg::FanOut, None, None),
            Err(ScanError::MissingMaxId { .. })
        ));
    }

    #[test]
    fn test_resolve_watch_list() {
        assert_eq!(resolve_watch_list(None).unwrap(), WatchList::default());

        let custom = resolve_watch_list(Some(vec!["A".to_string(), "B".to_string()])).unwrap();
        assert_eq!(custom.len(), 2);
        assert!(custom.matches("B"));

        assert!(matches!(
            resolve_watch_list(Some(vec![])),
            Err(ScanError::EmptyWatchList)
        ));
    }
}
