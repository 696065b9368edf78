//! JSON array codec shared by the account and expense files.

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    domain::{Account, Expense},
    errors::{FinanceError, RecordKind, Result},
};

/// A record type persisted as a JSON array of objects.
pub(crate) trait Record: Serialize + DeserializeOwned {
    const KIND: RecordKind;
}

impl Record for Account {
    const KIND: RecordKind = RecordKind::Account;
}

impl Record for Expense {
    const KIND: RecordKind = RecordKind::Expense;
}

/// Id for the record stored after `count` existing ones, numbered from `first`.
pub(crate) fn next_id<T: Record>(count: usize, first: u32) -> Result<u32> {
    u32::try_from(count)
        .ok()
        .and_then(|count| count.checked_add(first))
        .ok_or(FinanceError::TooManyRecords(T::KIND))
}

/// Serializes records in storage order.
pub(crate) fn encode<T: Record>(records: &[T]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(records).map_err(FinanceError::Encode)
}

/// Parses a record file. Empty or whitespace-only input is an empty sequence.
pub(crate) fn decode<T: Record>(bytes: &[u8]) -> Result<Vec<T>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(bytes).map_err(|err| T::KIND.corrupt(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn sample_expenses() -> Vec<Expense> {
        let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        vec![
            Expense::new(1, "Coffee", None, date, 4.5),
            Expense::new(2, "Refund", Some("store credit".into()), date, -12.25),
        ]
    }

    fn generated_expenses(count: usize) -> Vec<Expense> {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..count)
            .map(|i| {
                let description = (i % 2 == 0).then(|| format!("note {i}"));
                let date = first + chrono::Days::new(i as u64 % 366);
                let value = i as f64 * 0.75 - 3.0;
                Expense::new(i as u32 + 1, format!("item {i}"), description, date, value)
            })
            .collect()
    }

    #[test]
    fn accounts_survive_a_roundtrip() {
        for count in [0, 1, 2, 25] {
            let accounts: Vec<Account> = (0..count)
                .map(|i| Account::new(i, format!("user {i}"), format!("u{i}@x.com")))
                .collect();
            let decoded: Vec<Account> = decode(&encode(&accounts).unwrap()).unwrap();
            assert_eq!(decoded, accounts, "{count} accounts");
        }
    }

    #[test]
    fn expenses_survive_a_roundtrip() {
        let expenses = sample_expenses();
        let decoded: Vec<Expense> = decode(&encode(&expenses).unwrap()).unwrap();
        assert_eq!(decoded, expenses);

        for count in [0, 1, 40] {
            let expenses = generated_expenses(count);
            let decoded: Vec<Expense> = decode(&encode(&expenses).unwrap()).unwrap();
            assert_eq!(decoded, expenses, "{count} expenses");
        }
    }

    #[test]
    fn next_id_counts_from_the_first_id() {
        assert_eq!(next_id::<Account>(0, 0).unwrap(), 0);
        assert_eq!(next_id::<Account>(7, 0).unwrap(), 7);
        assert_eq!(next_id::<Expense>(0, 1).unwrap(), 1);
        assert_eq!(next_id::<Expense>(7, 1).unwrap(), 8);
    }

    #[test]
    fn next_id_refuses_to_wrap() {
        let err = next_id::<Expense>(u32::MAX as usize, 1).unwrap_err();
        assert!(matches!(err, FinanceError::TooManyRecords(RecordKind::Expense)));
        assert_eq!(err.record_kind(), Some(RecordKind::Expense));
        assert_eq!(next_id::<Account>(u32::MAX as usize, 0).unwrap(), u32::MAX);
        if let Some(count) = (u32::MAX as usize).checked_add(1) {
            assert!(matches!(
                next_id::<Account>(count, 0),
                Err(FinanceError::TooManyRecords(RecordKind::Account))
            ));
        }
    }

    #[test]
    fn expense_layout_uses_date_literals_and_nullable_description() {
        let bytes = encode(&sample_expenses()[..1]).unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let entry = &json[0];
        assert_eq!(entry["id"], 1);
        assert_eq!(entry["name"], "Coffee");
        assert_eq!(entry["date"], "2024-06-12");
        assert_eq!(entry["value"], 4.5);
        assert!(entry["description"].is_null());
        assert!(entry["guid"].is_string());
    }

    #[test]
    fn empty_input_decodes_to_no_records() {
        assert!(decode::<Account>(b"").unwrap().is_empty());
        assert!(decode::<Expense>(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn malformed_input_is_tagged_with_record_kind() {
        let err = decode::<Account>(b"{not json").unwrap_err();
        assert!(matches!(err, FinanceError::CorruptAccounts(_)));
        assert_eq!(err.record_kind(), Some(RecordKind::Account));

        let err = decode::<Expense>(b"null").unwrap_err();
        assert!(matches!(err, FinanceError::CorruptExpenses(_)));
        assert_eq!(err.record_kind(), Some(RecordKind::Expense));
    }
}
