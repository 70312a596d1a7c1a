use super::parser::Row;
use crate::error::{ConvertError, Result};

const COLUMN_COUNT: usize = 7;

/// Columns of the YNAB register export we read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Account,
    Date,
    Payee,
    Category,
    Memo,
    Outflow,
    Inflow,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Account,
        Column::Date,
        Column::Payee,
        Column::Category,
        Column::Memo,
        Column::Outflow,
        Column::Inflow,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Account => "Account",
            Column::Date => "Date",
            Column::Payee => "Payee",
            Column::Category => "Category Group/Category",
            Column::Memo => "Memo",
            Column::Outflow => "Outflow",
            Column::Inflow => "Inflow",
        }
    }
}

pub fn find_column(headers: &[String], column: Column) -> Option<usize> {
    headers.iter().position(|header| header == column.header())
}

/// Position of every [`Column`] in the rows of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderIndex {
    positions: [usize; COLUMN_COUNT],
}

impl HeaderIndex {
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let mut positions = [0; COLUMN_COUNT];
        for column in Column::ALL {
            positions[column as usize] =
                find_column(headers, column).ok_or_else(|| ConvertError::MissingColumn {
                    headers: headers.to_vec(),
                })?;
        }
        Ok(Self { positions })
    }

    pub fn position(&self, column: Column) -> usize {
        self.positions[column as usize]
    }

    /// Number of fields a row needs so that every column can be read
    pub fn required_len(&self) -> usize {
        self.positions.iter().max().map_or(0, |max| max + 1)
    }

    /// View `row` through the header, `None` if the row is too short.
    pub fn record<'a>(&'a self, row: &'a Row) -> Option<Record<'a>> {
        (row.fields.len() >= self.required_len()).then_some(Record {
            index: self,
            fields: &row.fields,
        })
    }
}

/// A row that has all columns.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    index: &'a HeaderIndex,
    fields: &'a [String],
}

impl<'a> Record<'a> {
    pub fn get(&self, column: Column) -> &'a str {
        &self.fields[self.index.position(column)]
    }
}
