//! # Register Recovery
//!
//! The register is the durable record of issuance. These tests start the
//! runtime against registers left behind by earlier runs.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{asha, Desk, ASHA_ID};
    use ht_02_record_store::{RecordStoreApi, RecordStoreError, TABLE_HEADER};
    use ht_04_issuance::IssuanceApi;
    use shared_types::FixedClock;
    use ticket_runtime::build_pipeline;

    fn write_register(desk: &Desk, body: &str) {
        let contents = format!("{}\n{}", TABLE_HEADER.join(","), body);
        std::fs::write(desk.register(), contents).unwrap();
    }

    #[test]
    fn test_rows_from_earlier_run_are_duplicates() {
        let desk = Desk::new();
        write_register(
            &desk,
            &format!(
                "R100,Asha,2005-01-01,ABC College,hall_tickets/{id}.pdf,{id},2026-01-05\n",
                id = ASHA_ID
            ),
        );

        let mut pipeline = desk.open();
        assert_eq!(pipeline.store().len(), 1);
        assert!(pipeline.issue(&asha(), None).unwrap().is_duplicate());
        assert!(desk.documents().is_empty());
    }

    #[test]
    fn test_empty_register_file_initialized() {
        let desk = Desk::new();
        std::fs::write(desk.register(), b"").unwrap();

        let mut pipeline = desk.open();
        pipeline.issue(&asha(), None).unwrap();

        let lines = desk.register_lines();
        assert_eq!(lines[0], TABLE_HEADER.join(","));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_torn_row_discarded_then_reissued() {
        let desk = Desk::new();
        write_register(&desk, "R100,Asha,2005-01-01,ABC Col");

        let mut pipeline = desk.open();
        assert!(pipeline.store().is_empty());
        assert!(!pipeline.issue(&asha(), None).unwrap().is_duplicate());
        assert_eq!(desk.register_lines().len(), 2);
    }

    #[test]
    fn test_foreign_register_refused() {
        let desk = Desk::new();
        std::fs::write(desk.register(), "id,name\n1,Asha\n").unwrap();

        let err = match build_pipeline(&desk.config, FixedClock(super::super::fixtures::issued_on())) {
            Ok(_) => panic!("foreign register accepted"),
            Err(err) => err,
        };
        assert!(matches!(
            err.downcast_ref::<RecordStoreError>(),
            Some(RecordStoreError::StorageUnavailable { .. })
        ));
    }

    #[test]
    fn test_second_desk_locked_out() {
        let desk = Desk::new();
        let _first = desk.open();

        let err = match build_pipeline(&desk.config, FixedClock(super::super::fixtures::issued_on())) {
            Ok(_) => panic!("register opened twice"),
            Err(err) => err,
        };
        assert!(matches!(
            err.downcast_ref::<RecordStoreError>(),
            Some(RecordStoreError::StorageLocked { .. })
        ));
    }
}
