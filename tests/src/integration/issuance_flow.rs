//! # Issuance Flow
//!
//! Identity → register → composer → register, over the CSV register, the PDF
//! renderer and the QR encoder.
//!
//! ## Flows Tested
//!
//! 1. **New candidate**: document at `<storage>/<hash>.pdf`, one register row
//! 2. **Resubmission**: duplicate outcome, nothing re-rendered or re-recorded
//! 3. **Restart**: a reopened register still recognizes earlier tickets
//! 4. **Photos**: captured stills are embedded and their temp files released
//! 5. **Concurrency**: a shared pipeline issues exactly once per candidate

#[cfg(test)]
mod tests {
    use super::super::fixtures::{asha, issued_on, jpeg_bytes, Desk, ASHA_ID};
    use ht_02_record_store::{RecordStoreApi, TABLE_HEADER};
    use ht_04_issuance::{
        IssuanceApi, IssuanceOutcome, PhotoSource, PipelineError, PipelineState,
        RejectionReason, SharedIssuancePipeline, StillFileSource,
    };
    use shared_types::{CandidateFields, Identifier, PhotoResource};

    #[test]
    fn test_example_candidate_issued() {
        let desk = Desk::new();
        let mut pipeline = desk.open();

        let outcome = pipeline.issue(&asha(), None).unwrap();

        let ticket = outcome.issued().expect("new ticket");
        let expected = desk.storage_dir().join(format!("{}.pdf", ASHA_ID));
        assert_eq!(ticket.identifier.as_str(), ASHA_ID);
        assert_eq!(ticket.document_path, expected);
        assert!(std::fs::read(&expected).unwrap().starts_with(b"%PDF-"));

        let lines = desk.register_lines();
        assert_eq!(lines[0], TABLE_HEADER.join(","));
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            format!(
                "R100,Asha,2005-01-01,ABC College,{},{},2026-10-19",
                expected.display(),
                ASHA_ID
            )
        );
        assert!(desk.scratch_is_empty());
    }

    #[test]
    fn test_resubmission_is_duplicate() {
        let desk = Desk::new();
        let mut pipeline = desk.open();

        pipeline.issue(&asha(), None).unwrap();
        let document = desk.storage_dir().join(format!("{}.pdf", ASHA_ID));
        let modified = std::fs::metadata(&document).unwrap().modified().unwrap();

        let second = pipeline.issue(&asha(), None).unwrap();

        assert_eq!(
            second,
            IssuanceOutcome::Duplicate {
                identifier: Identifier::parse(ASHA_ID).unwrap()
            }
        );
        assert_eq!(pipeline.store().len(), 1);
        assert_eq!(desk.register_lines().len(), 2);
        assert_eq!(
            std::fs::metadata(&document).unwrap().modified().unwrap(),
            modified
        );
    }

    #[test]
    fn test_duplicate_survives_restart() {
        let desk = Desk::new();
        {
            let mut pipeline = desk.open();
            pipeline.issue(&asha(), None).unwrap();
        }

        let mut reopened = desk.open();
        assert!(reopened
            .store()
            .contains(&Identifier::parse(ASHA_ID).unwrap()));
        assert!(reopened.issue(&asha(), None).unwrap().is_duplicate());
        assert_eq!(desk.register_lines().len(), 2);
    }

    #[test]
    fn test_incomplete_fields_write_nothing() {
        let desk = Desk::new();
        let mut pipeline = desk.open();

        let fields = CandidateFields::new("R100", "Asha", "", "ABC College");
        let result = pipeline.issue(&fields, None);

        assert_eq!(
            result,
            Err(PipelineError::MissingFields {
                fields: vec!["date_of_birth"]
            })
        );
        assert!(desk.documents().is_empty());
        assert_eq!(desk.register_lines().len(), 1);
    }

    #[test]
    fn test_several_candidates_in_order() {
        let desk = Desk::new();
        let mut pipeline = desk.open();

        for roll in ["R100", "R101", "R102"] {
            let fields = CandidateFields::new(roll, "Asha", "2005-01-01", "ABC College");
            assert!(!pipeline.issue(&fields, None).unwrap().is_duplicate());
        }

        let rolls: Vec<String> = pipeline
            .store()
            .records()
            .unwrap()
            .into_iter()
            .map(|r| r.roll_number)
            .collect();
        assert_eq!(rolls, vec!["R100", "R101", "R102"]);
        assert_eq!(desk.documents().len(), 3);
    }

    #[test]
    fn test_captured_photo_embedded_and_released() {
        let desk = Desk::new();
        std::fs::create_dir_all(desk.scratch_dir()).unwrap();
        let device = desk.dir.path().join("camera.jpg");
        std::fs::write(&device, jpeg_bytes()).unwrap();
        let camera = StillFileSource::new(&device).with_scratch_dir(desk.scratch_dir());

        let photo = camera.capture().unwrap();
        let captured = photo.path().unwrap().to_path_buf();
        assert!(captured.exists());

        let mut pipeline = desk.open();
        let without_photo = {
            let other = Desk::new();
            let mut plain = other.open();
            let ticket = plain.issue(&asha(), None).unwrap();
            std::fs::metadata(&ticket.issued().unwrap().document_path)
                .unwrap()
                .len()
        };
        let outcome = pipeline.issue(&asha(), Some(photo)).unwrap();

        let with_photo = std::fs::metadata(&outcome.issued().unwrap().document_path)
            .unwrap()
            .len();
        assert!(with_photo > without_photo);
        assert!(!captured.exists());
        assert!(desk.scratch_is_empty());
    }

    #[test]
    fn test_captured_photo_released_on_duplicate() {
        let desk = Desk::new();
        std::fs::create_dir_all(desk.scratch_dir()).unwrap();
        let device = desk.dir.path().join("camera.jpg");
        std::fs::write(&device, jpeg_bytes()).unwrap();
        let camera = StillFileSource::new(&device).with_scratch_dir(desk.scratch_dir());

        let mut pipeline = desk.open();
        pipeline.issue(&asha(), None).unwrap();

        let photo = camera.capture().unwrap();
        let captured = photo.path().unwrap().to_path_buf();
        assert!(pipeline.issue(&asha(), Some(photo)).unwrap().is_duplicate());

        assert!(!captured.exists());
        assert_eq!(
            pipeline.last_state(),
            PipelineState::Rejected(RejectionReason::DuplicateTicket)
        );
    }

    #[test]
    fn test_photo_bytes_embedded() {
        let desk = Desk::new();
        let mut pipeline = desk.open();

        let outcome = pipeline
            .issue(&asha(), Some(PhotoResource::Bytes(jpeg_bytes())))
            .unwrap();

        assert!(outcome.issued().is_some());
        assert!(desk.scratch_is_empty());
    }

    #[test]
    fn test_missing_photo_file_still_issues() {
        let desk = Desk::new();
        let mut pipeline = desk.open();
        let missing = desk.dir.path().join("never-captured.jpg");

        let outcome = pipeline
            .issue(&asha(), Some(PhotoResource::Path(missing)))
            .unwrap();
        assert!(outcome.issued().is_some());
    }

    #[test]
    fn test_shared_pipeline_single_issue() {
        let desk = Desk::new();
        let shared = SharedIssuancePipeline::new(desk.open());

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.issue(&asha(), None).unwrap())
            })
            .collect();
        let issued = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|outcome| !outcome.is_duplicate())
            .count();

        assert_eq!(issued, 1);
        assert_eq!(desk.register_lines().len(), 2);
        assert_eq!(desk.documents().len(), 1);
    }

    #[test]
    fn test_issue_date_recorded() {
        let desk = Desk::new();
        let mut pipeline = desk.open();
        pipeline.issue(&asha(), None).unwrap();

        let records = pipeline.store().records().unwrap();
        assert_eq!(records[0].issued_on, issued_on());
    }
}
