use chrono::NaiveDate;
use prorata_core::{
    AppendOutcome, CsvExpenseRepository, ExpenseEntry, ExpenseLedger, ExpenseRejection,
    ExpenseRepository, RepoError, RepoResult, ServiceError,
};
use regex::Regex;

fn ledger_in(dir: &tempfile::TempDir) -> ExpenseLedger<CsvExpenseRepository> {
    ExpenseLedger::new(CsvExpenseRepository::new(
        dir.path().join("historique_budget.csv"),
    ))
}

fn noon(day: u32, month: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn missing_record_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ledger_in(&dir).load().unwrap().is_empty());
}

#[test]
fn rejected_add_keeps_only_valid_entry() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);

    let first = ledger.append_at("Courses", 50.0, noon(5, 8)).unwrap();
    assert!(first.is_appended());
    let second = ledger.append_at("", 20.0, noon(5, 8)).unwrap();
    assert_eq!(
        second,
        AppendOutcome::Rejected(ExpenseRejection::EmptyDescription)
    );

    assert_eq!(
        ledger.load().unwrap(),
        vec![ExpenseEntry::new("05-08 12:00", "Courses", 50.0)]
    );
}

#[test]
fn non_positive_amount_is_rejected_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);

    for amount in [0.0, -12.0] {
        let outcome = ledger.append_at("Taxi", amount, noon(1, 1)).unwrap();
        assert_eq!(
            outcome,
            AppendOutcome::Rejected(ExpenseRejection::NonPositiveAmount)
        );
    }
    assert!(!dir.path().join("historique_budget.csv").exists());
}

#[test]
fn append_keeps_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);

    ledger.append_at("Billets", 320.0, noon(1, 7)).unwrap();
    ledger.append_at("Hôtel", 540.5, noon(2, 7)).unwrap();
    ledger.append_at("Glaces, plage", 9.9, noon(3, 7)).unwrap();

    let descriptions = ledger
        .load()
        .unwrap()
        .into_iter()
        .map(|entry| entry.description)
        .collect::<Vec<_>>();
    assert_eq!(descriptions, vec!["Billets", "Hôtel", "Glaces, plage"]);
}

#[test]
fn append_stamps_current_time_as_day_month_hour_minute() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);

    let entry = match ledger.append("Pain", 2.4).unwrap() {
        AppendOutcome::Appended(entry) => entry,
        other => panic!("expected append, got {other:?}"),
    };
    let shape = Regex::new(r"^\d{2}-\d{2} \d{2}:\d{2}$").unwrap();
    assert!(shape.is_match(&entry.date), "unexpected date {}", entry.date);
}

#[test]
fn replace_all_round_trips_exact_rows() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);
    ledger.append_at("Courses", 50.0, noon(5, 8)).unwrap();

    let edited = vec![
        ExpenseEntry::new("edited date", "", 0.0),
        ExpenseEntry::new("05-08 12:00", "Courses \"bio\"", 0.1 + 0.2),
        ExpenseEntry::new("", "Péage", 17.35),
    ];
    assert!(ledger.replace_all(edited.clone()).unwrap());
    assert_eq!(ledger.load().unwrap(), edited);
}

#[test]
fn replace_all_with_identical_rows_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);
    ledger.append_at("Courses", 50.0, noon(5, 8)).unwrap();

    let current = ledger.load().unwrap();
    assert!(!ledger.replace_all(current).unwrap());

    assert!(!ledger_in(&tempfile::tempdir().unwrap())
        .replace_all(Vec::new())
        .unwrap());
}

#[test]
fn replace_all_can_delete_rows() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);
    ledger.append_at("A", 1.0, noon(1, 1)).unwrap();
    ledger.append_at("B", 2.0, noon(1, 1)).unwrap();

    let mut rows = ledger.load().unwrap();
    rows.remove(0);
    assert!(ledger.replace_all(rows).unwrap());

    let remaining = ledger.load().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].description, "B");
}

#[test]
fn replace_all_rejects_negative_amount() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);
    ledger.append_at("Courses", 50.0, noon(5, 8)).unwrap();

    let err = ledger
        .replace_all(vec![
            ExpenseEntry::new("", "ok", 1.0),
            ExpenseEntry::new("", "bad", -1.0),
        ])
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidExpense { row: 1, .. }));
    assert_eq!(ledger.load().unwrap().len(), 1);
}

#[test]
fn clear_deletes_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);
    ledger.append_at("Courses", 50.0, noon(5, 8)).unwrap();

    assert!(ledger.clear().unwrap());
    assert!(!dir.path().join("historique_budget.csv").exists());
    assert!(ledger.load().unwrap().is_empty());
    assert!(!ledger.clear().unwrap());
}

#[test]
fn corrupt_record_propagates_storage_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ledger_in(&dir);
    std::fs::write(
        dir.path().join("historique_budget.csv"),
        "Date,Description,Montant\n01-01 10:00,Pain,\n",
    )
    .unwrap();

    let err = ledger.load().unwrap_err();
    assert!(err.is_storage_read());

    let err = ledger.append_at("Lait", 1.2, noon(1, 1)).unwrap_err();
    assert!(err.is_storage_read());
}

/// Reads through to the CSV record but refuses every write.
struct ReadOnlyRepository {
    inner: CsvExpenseRepository,
}

impl ExpenseRepository for ReadOnlyRepository {
    fn load_expenses(&self) -> RepoResult<Option<Vec<ExpenseEntry>>> {
        self.inner.load_expenses()
    }

    fn save_expenses(&self, _entries: &[ExpenseEntry]) -> RepoResult<()> {
        Err(RepoError::Encode {
            path: self.inner.path().to_path_buf(),
            detail: "write refused".to_string(),
        })
    }

    fn clear_expenses(&self) -> RepoResult<bool> {
        self.inner.clear_expenses()
    }
}

#[test]
fn failed_replace_keeps_previous_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("historique_budget.csv");
    ledger_in(&dir)
        .append_at("Courses", 50.0, noon(5, 8))
        .unwrap();
    let before = std::fs::read(&path).unwrap();

    let ledger = ExpenseLedger::new(ReadOnlyRepository {
        inner: CsvExpenseRepository::new(&path),
    });
    let err = ledger
        .replace_all(vec![ExpenseEntry::new("", "Autre", 1.0)])
        .unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepoError::Encode { .. })));

    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(
        ledger.load().unwrap(),
        vec![ExpenseEntry::new("05-08 12:00", "Courses", 50.0)]
    );
}

#[test]
fn failed_write_under_a_regular_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "occupied").unwrap();
    let ledger = ExpenseLedger::new(CsvExpenseRepository::new(blocker.join("ledger.csv")));

    assert!(ledger.append_at("Courses", 50.0, noon(5, 8)).is_err());
    assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "occupied");
}
