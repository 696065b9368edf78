mod common;

use std::{collections::HashSet, fs};

use chrono::NaiveDate;
use finance_core::{
    config::DataPaths,
    domain::Span,
    storage::{AccountDirectory, ExpensePartitionStore, PartitionKey},
    FinanceError, WorkingContext,
};

use common::{base_dir, open};

#[test]
fn restart_restores_selection_span_and_expenses() {
    let base = base_dir();
    {
        let mut manager = open(&base);
        assert!(manager.list_accounts().is_empty());

        let account = manager.create_account("Alan", "a@x.com").unwrap();
        assert_eq!(account.id, 0);
        manager.select_account(0).unwrap();

        let expense = manager.add_expense("Coffee", 4.5, 12, None).unwrap();
        assert_eq!(expense.id, 1);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
    }

    let manager = open(&base);
    assert_eq!(
        manager.context(),
        WorkingContext {
            selected_account_index: Some(0),
            active_span: Span::new(2024, 6).unwrap(),
        }
    );
    let expenses = manager.list_expenses().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].name, "Coffee");
    assert_eq!(expenses[0].value, 4.5);
}

#[test]
fn restart_restores_a_switched_span() {
    let base = base_dir();
    {
        let mut manager = open(&base);
        manager.create_account("Alan", "a@x.com").unwrap();
        manager.select_account(0).unwrap();
        manager.switch_span(2023, 12).unwrap();
        manager.add_expense("Gifts", 120.0, 24, Some("family".into())).unwrap();
    }

    let manager = open(&base);
    assert_eq!(manager.active_span(), Span::new(2023, 12).unwrap());
    let expenses = manager.list_expenses().unwrap();
    assert_eq!(expenses[0].description.as_deref(), Some("family"));
}

#[test]
fn day_31_in_april_is_rejected() {
    let base = base_dir();
    let mut manager = open(&base);
    manager.create_account("Alan", "a@x.com").unwrap();
    manager.select_account(0).unwrap();
    manager.switch_span(2024, 4).unwrap();

    assert!(matches!(
        manager.add_expense("Rent", 900.0, 31, None),
        Err(FinanceError::InvalidDate { day: 31, .. })
    ));
    assert!(manager.list_expenses().unwrap().is_empty());
}

#[test]
fn switching_away_and_back_keeps_partition_unchanged() {
    let base = base_dir();
    let mut manager = open(&base);
    let guid = manager.create_account("Alan", "a@x.com").unwrap().guid;
    manager.select_account(0).unwrap();
    manager.add_expense("Coffee", 4.5, 12, None).unwrap();
    manager.add_expense("Bread", 3.0, 13, Some("bakery".into())).unwrap();

    let june = ExpensePartitionStore::new(&base).partition_path(&PartitionKey {
        account: guid,
        span: Span::new(2024, 6).unwrap(),
    });
    let before = fs::read(&june).unwrap();
    let listed_before: Vec<_> = manager
        .list_expenses()
        .unwrap()
        .into_iter()
        .cloned()
        .collect();

    manager.switch_span(2031, 1).unwrap();
    assert!(manager.list_expenses().unwrap().is_empty());
    manager.switch_span(2024, 6).unwrap();

    let listed_after: Vec<_> = manager
        .list_expenses()
        .unwrap()
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(listed_before, listed_after);
    assert_eq!(fs::read(&june).unwrap(), before);
}

#[test]
fn accounts_get_dense_ids_and_unique_guids() {
    for n in [0, 1, 2, 12, 40] {
        let base = base_dir();
        let mut manager = open(&base);
        for i in 0..n {
            manager
                .create_account(&format!("user{i}"), &format!("user{i}@x.com"))
                .unwrap();
        }

        let listed = manager.list_accounts();
        assert_eq!(listed.len(), n);
        let ids: Vec<u32> = listed.iter().map(|account| account.id).collect();
        let expected: Vec<u32> = (0..n as u32).rev().collect();
        assert_eq!(ids, expected, "{n} accounts");
        let guids: HashSet<_> = listed.iter().map(|account| account.guid).collect();
        assert_eq!(guids.len(), n);

        let reloaded = AccountDirectory::load(DataPaths::new(&base).accounts_file()).unwrap();
        assert_eq!(reloaded.len(), n);
    }
}

#[test]
fn expense_ids_are_dense_from_one() {
    for n in [0, 1, 3, 28] {
        let base = base_dir();
        let mut manager = open(&base);
        manager.create_account("Alan", "a@x.com").unwrap();
        manager.select_account(0).unwrap();
        for day in 1..=n {
            manager.add_expense("Fee", 1.0, day, None).unwrap();
        }
        drop(manager);

        let manager = open(&base);
        let ids: Vec<u32> = manager
            .list_expenses()
            .unwrap()
            .iter()
            .map(|expense| expense.id)
            .collect();
        let expected: Vec<u32> = (1..=n).rev().collect();
        assert_eq!(ids, expected, "{n} expenses");
    }
}

#[test]
fn selection_is_bounded_by_account_count() {
    let base = base_dir();
    let mut manager = open(&base);
    for name in ["Alan", "Bea", "Cris"] {
        manager.create_account(name, "someone@x.com").unwrap();
    }

    for index in [-5, -1, 3, 4] {
        assert!(matches!(
            manager.select_account(index),
            Err(FinanceError::InvalidSelection(i)) if i == index
        ));
    }
    for index in 0..3 {
        assert_eq!(manager.select_account(index).unwrap().id as i64, index);
        assert_eq!(manager.context().selected_account_index, Some(index as usize));
    }
}

#[test]
fn expenses_land_inside_every_switched_month() {
    let base = base_dir();
    let mut manager = open(&base);
    manager.create_account("Alan", "a@x.com").unwrap();
    manager.select_account(0).unwrap();

    for (year, month) in [(2024, 2), (2023, 2), (1999, 12), (2030, 7)] {
        let span = manager.switch_span(year, month).unwrap();
        let date = manager.add_expense("Fee", 1.0, 28, None).unwrap().date;
        assert_eq!(Span::containing(date), span);
    }
    for (year, month) in [(2024, 0), (2024, 13), (0, 1)] {
        assert!(matches!(
            manager.switch_span(year, month),
            Err(FinanceError::InvalidSpan { .. })
        ));
    }
}

#[test]
fn stale_checkpoint_index_aborts_init_and_is_kept() {
    let base = base_dir();
    {
        let mut manager = open(&base);
        manager.create_account("Alan", "a@x.com").unwrap();
        manager.select_account(0).unwrap();
    }
    let state = DataPaths::new(&base).state_file();
    let written = fs::read(&state).unwrap();

    fs::write(DataPaths::new(&base).accounts_file(), "[]").unwrap();
    let result = finance_core::WorkingContextManager::init(
        DataPaths::new(&base),
        common::june_clock(),
    );
    assert!(matches!(result, Err(FinanceError::InvalidSelection(0))));
    assert_eq!(fs::read(&state).unwrap(), written);
}
