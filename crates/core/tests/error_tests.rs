// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use pnl_journal_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad float".into());
        assert_eq!(err.to_string(), "Serialization error: bad float");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("eof".into());
        assert_eq!(err.to_string(), "Deserialization error: eof");
    }

    #[test]
    fn storage_io() {
        let err = CoreError::StorageIO("disk full".into());
        assert_eq!(err.to_string(), "Storage I/O error: disk full");
    }

    #[test]
    fn invalid_date() {
        let err = CoreError::InvalidDate("2024-13-01".into());
        assert_eq!(
            err.to_string(),
            "Invalid date key '2024-13-01': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn invalid_month() {
        let err = CoreError::InvalidMonth("month index 12 out of range".into());
        assert_eq!(err.to_string(), "Invalid month: month index 12 out of range");
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("storage_key must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: storage_key must not be empty"
        );
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::StorageIO(ref m) if m.contains("denied")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates_io() {
        fn read_missing() -> Result<String, CoreError> {
            Ok(std::fs::read_to_string("/definitely/not/here/journal.json")?)
        }
        assert!(matches!(read_missing(), Err(CoreError::StorageIO(_))));
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CoreError>();
    }
}
