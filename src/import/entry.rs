use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::header::{Column, Record};
use crate::config::Mapping;
use crate::ir::{EntryDate, JournalEntry, Posting};

/// Payees of transfer rows contain this, followed by the other account
pub const TRANSFER_MARKER: &str = "Transfer :";

/// Why a row didn't produce an entry. None of these stop the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    /// Both inflow and outflow are blank or zero
    NoMoneyMovement,
    MalformedDate,
    /// The inflow side of a transfer, the outflow side on the other account carries it
    TransferInflowLeg,
    /// The source account resolved to an empty name
    EmptySource,
    InsufficientFields,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            SkipReason::NoMoneyMovement => "no inflow or outflow",
            SkipReason::MalformedDate => "malformed date",
            SkipReason::TransferInflowLeg => "inflow side of a transfer",
            SkipReason::EmptySource => "empty source account",
            SkipReason::InsufficientFields => "insufficient fields",
        };
        f.write_str(description)
    }
}

fn zero_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\p{Sc}?0(\.0+)?$").expect("invalid zero amount regex"))
}

/// Blank out zero amounts like `$0.00`, `€0` or `0.000`. Anything else is returned as is.
pub fn blank_if_zero(amount: &str) -> &str {
    if zero_amount_re().is_match(amount) {
        ""
    } else {
        amount
    }
}

fn non_blank_amount(amount: &str) -> Option<&str> {
    Some(blank_if_zero(amount)).filter(|amount| !amount.is_empty())
}

/// The account name after the last colon of a transfer payee.
fn transfer_target(payee: &str) -> &str {
    payee.rsplit(':').next().unwrap_or(payee).trim()
}

pub fn build_entry(record: &Record<'_>, mapping: &Mapping) -> Result<JournalEntry, SkipReason> {
    let outflow = non_blank_amount(record.get(Column::Outflow));
    let inflow = non_blank_amount(record.get(Column::Inflow));
    if outflow.is_none() && inflow.is_none() {
        return Err(SkipReason::NoMoneyMovement);
    }

    let date =
        EntryDate::from_month_day_year(record.get(Column::Date)).ok_or(SkipReason::MalformedDate)?;

    let payee = record.get(Column::Payee);
    let source = if payee.contains(TRANSFER_MARKER) {
        if outflow.is_none() {
            return Err(SkipReason::TransferInflowLeg);
        }
        mapping.resolve_account(transfer_target(payee))
    } else {
        mapping.resolve_category(record.get(Column::Category))
    };
    if source.is_empty() {
        return Err(SkipReason::EmptySource);
    }

    let destination = mapping.resolve_account(record.get(Column::Account));

    Ok(JournalEntry {
        date,
        description: format!("{payee}{}", record.get(Column::Memo)),
        source: Posting {
            account: source.to_string(),
            amount: outflow.map(str::to_string),
        },
        destination: Posting {
            account: destination.to_string(),
            amount: inflow.map(str::to_string),
        },
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::import::header::HeaderIndex;
    use crate::import::parser::Row;

    const HEADERS: [&str; 7] = [
        "Account",
        "Date",
        "Payee",
        "Category Group/Category",
        "Memo",
        "Outflow",
        "Inflow",
    ];

    fn mapping() -> Mapping {
        Mapping::from_yaml(
            r#"
accounts:
  Checking: Assets:Checking
  Credit Card: Liabilities:Credit-Card
  American Express: Liabilities:Amex
categories:
  "Inflow: To be Budgeted": Income:Salary
  "Just for Fun: Dining Out": Expenses:Food:Dining
  "Ignored": ""
"#,
        )
        .unwrap()
    }

    fn build(fields: [&str; 7]) -> Result<JournalEntry, SkipReason> {
        let headers = HEADERS.map(str::to_string);
        let index = HeaderIndex::resolve(&headers).unwrap();
        let row = Row {
            line: 2,
            fields: fields.map(str::to_string).to_vec(),
        };
        build_entry(&index.record(&row).unwrap(), &mapping())
    }

    #[rstest]
    #[case("$0.00")]
    #[case("€0.00")]
    #[case("£0")]
    #[case("0.000")]
    #[case("$0")]
    #[case("0")]
    #[case("")]
    fn zero_amounts_are_blank(#[case] amount: &str) {
        assert_eq!("", blank_if_zero(amount));
    }

    #[rstest]
    #[case("$1.45")]
    #[case("$0.01")]
    #[case("$10.00")]
    #[case("-$0.00")]
    #[case("$$0")]
    #[case("0.")]
    #[case(" $0.00")]
    #[case("USD0.00")]
    fn other_amounts_are_unchanged(#[case] amount: &str) {
        assert_eq!(amount, blank_if_zero(amount));
    }

    #[test]
    fn inflow() {
        let entry = build([
            "Checking",
            "12/30/2020",
            "ACH Credit",
            "Inflow: To be Budgeted",
            "",
            "$0.00",
            "$100.45",
        ])
        .unwrap();
        assert_eq!("2020/12/30", entry.date.to_string());
        assert_eq!("ACH Credit", entry.description);
        assert_eq!(
            Posting {
                account: "Income:Salary".to_string(),
                amount: None,
            },
            entry.source
        );
        assert_eq!(
            Posting {
                account: "Assets:Checking".to_string(),
                amount: Some("$100.45".to_string()),
            },
            entry.destination
        );
    }

    #[test]
    fn outflow() {
        let entry = build([
            "Credit Card",
            "12/28/2020",
            "Some Restaurant",
            "Just for Fun: Dining Out",
            "",
            "$41.04",
            "$0.00",
        ])
        .unwrap();
        assert_eq!("Expenses:Food:Dining", entry.source.account);
        assert_eq!(Some("$41.04".to_string()), entry.source.amount);
        assert_eq!("Liabilities:Credit-Card", entry.destination.account);
        assert_eq!(None, entry.destination.amount);
    }

    #[test]
    fn memo_is_appended_to_payee() {
        let entry = build([
            "Checking",
            "12/30/2020",
            "Bakery",
            "Just for Fun: Dining Out",
            " - croissants",
            "$3.50",
            "",
        ])
        .unwrap();
        assert_eq!("Bakery - croissants", entry.description);
    }

    #[test]
    fn transfer_outflow_uses_target_account() {
        let entry = build([
            "Checking",
            "12/18/2020",
            "Transfer : American Express",
            "",
            "",
            "$194.17",
            "$0.00",
        ])
        .unwrap();
        assert_eq!("Liabilities:Amex", entry.source.account);
        assert_eq!("Assets:Checking", entry.destination.account);
    }

    #[test]
    fn transfer_inflow_is_skipped() {
        assert_eq!(
            Err(SkipReason::TransferInflowLeg),
            build([
                "American Express",
                "12/18/2020",
                "Transfer : Checking",
                "",
                "",
                "$0.00",
                "$194.17",
            ])
        );
    }

    #[test]
    fn transfer_target_is_after_last_colon() {
        assert_eq!("Savings", transfer_target("Transfer : Joint: Savings "));
        assert_eq!("American Express", transfer_target("Transfer : American Express"));
    }

    #[test]
    fn unknown_transfer_target_uses_sentinel() {
        let entry = build([
            "Checking",
            "12/18/2020",
            "Transfer : Brokerage",
            "",
            "",
            "$10.00",
            "",
        ])
        .unwrap();
        assert_eq!("Assets:Unknown", entry.source.account);
    }

    #[test]
    fn unknown_labels_use_sentinels() {
        let entry = build([
            "Wallet",
            "01/02/2021",
            "Kiosk",
            "Bills: Phone",
            "",
            "$5.00",
            "",
        ])
        .unwrap();
        assert_eq!("Expenses:Unknown", entry.source.account);
        assert_eq!("Assets:Unknown", entry.destination.account);
    }

    #[rstest]
    #[case("$0.00", "$0.00")]
    #[case("", "")]
    #[case("€0", "0.00")]
    fn no_money_movement(#[case] outflow: &str, #[case] inflow: &str) {
        assert_eq!(
            Err(SkipReason::NoMoneyMovement),
            build(["Checking", "12/30/2020", "Payee", "Ignored", "", outflow, inflow])
        );
    }

    #[rstest]
    #[case("2020-12-30")]
    #[case("12/30")]
    #[case("12/30/2020/01")]
    #[case("")]
    fn malformed_date(#[case] date: &str) {
        assert_eq!(
            Err(SkipReason::MalformedDate),
            build(["Checking", date, "Payee", "Just for Fun: Dining Out", "", "$1.00", ""])
        );
    }

    #[test]
    fn empty_source_is_skipped() {
        assert_eq!(
            Err(SkipReason::EmptySource),
            build(["Checking", "12/30/2020", "Payee", "Ignored", "", "$1.00", ""])
        );
    }
}
