use chrono::NaiveDate;
use prorata_core::{
    round_to_cents, AllocationError, AppendOutcome, ExpenseEntry, FileSession, Participant,
    ServiceError, StorageConfig,
};

fn evening() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, 14)
        .unwrap()
        .and_hms_opt(20, 45, 0)
        .unwrap()
}

#[test]
fn fresh_directory_splits_by_default_incomes() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path());
    let session = FileSession::open(&config).unwrap();

    assert_eq!(session.total_income(), 5000.0);
    assert!(session.expenses().unwrap().is_empty());

    session.add_expense_at("Restaurant", 100.0, evening()).unwrap();
    let allocation = session.compute_allocation(true).unwrap();
    assert_eq!(round_to_cents(allocation.owed[0].owed), 40.0);
    assert_eq!(round_to_cents(allocation.owed[1].owed), 60.0);

    let breakdown = allocation.breakdown.unwrap();
    assert_eq!(
        breakdown.columns,
        vec!["Part Personne A (40%)", "Part Personne B (60%)"]
    );
    assert_eq!(
        breakdown.rows[0].entry,
        ExpenseEntry::new("14-07 20:45", "Restaurant", 100.0)
    );
}

#[test]
fn participant_edits_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path());

    {
        let mut session = FileSession::open(&config).unwrap();
        assert!(session.update_participant(0, "Alice", 4000.0).unwrap());
        assert!(session.add_participant().unwrap());
        assert!(session.update_participant(2, "Chloé", 1000.0).unwrap());
        assert!(!session.update_participant(2, "Chloé", 1000.0).unwrap());
    }

    let session = FileSession::open(&config).unwrap();
    assert_eq!(
        session.participants(),
        &[
            Participant::new("Alice", 4000.0),
            Participant::new("Personne B", 3000.0),
            Participant::new("Chloé", 1000.0),
        ]
    );
    assert!(config.participants_path().exists());
}

#[test]
fn zero_income_or_no_participants_shows_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = FileSession::open(&StorageConfig::new(dir.path())).unwrap();
    session.add_expense_at("Courses", 30.0, evening()).unwrap();

    session.update_participant(0, "A", 0.0).unwrap();
    session.update_participant(1, "B", 0.0).unwrap();
    assert!(!session.can_allocate());
    assert!(matches!(
        session.compute_allocation(false),
        Err(ServiceError::Allocation(AllocationError::ZeroTotalIncome))
    ));

    session.remove_last_participant().unwrap();
    session.remove_last_participant().unwrap();
    assert!(!session.remove_last_participant().unwrap());
    assert!(session.participants().is_empty());
    assert!(matches!(
        session.compute_allocation(false),
        Err(ServiceError::Allocation(AllocationError::NoParticipants))
    ));
}

#[test]
fn direct_edits_and_reset_flow_through_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path());
    let session = FileSession::open(&config).unwrap();

    session.add_expense_at("Courses", 50.0, evening()).unwrap();
    let rejected = session.add_expense_at("", 20.0, evening()).unwrap();
    assert!(matches!(rejected, AppendOutcome::Rejected(_)));
    assert_eq!(session.expenses().unwrap().len(), 1);

    let mut rows = session.expenses().unwrap();
    rows[0].amount = 80.0;
    rows.push(ExpenseEntry::new("", "Essence", 20.0));
    assert!(session.replace_all_expenses(rows.clone()).unwrap());
    assert_eq!(session.expenses().unwrap(), rows);
    assert_eq!(session.compute_allocation(false).unwrap().total_spent, 100.0);

    assert!(session.clear_expenses().unwrap());
    assert!(!config.expenses_path().exists());
    assert!(session.expenses().unwrap().is_empty());
}

#[test]
fn unreadable_participants_record_blocks_opening() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path());
    std::fs::write(config.participants_path(), "[{\"name\": \"A\"}]").unwrap();

    let err = match FileSession::open(&config) {
        Ok(_) => panic!("corrupt record must not open"),
        Err(err) => err,
    };
    assert!(err.is_storage_read());
}
