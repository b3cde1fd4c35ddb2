//! Line parsing and field-level normalization.

use itertools::Itertools;

use crate::document::{self, DocumentKind};
use crate::record::{
    DEFAULT_PURCHASE_DATE, FIELD_COUNT, FIELD_SEPARATOR, NULL_SENTINEL, ParseError,
};

/// One parsed data line
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    /// Person document, digits only (not checksum-validated)
    pub person_document: String,
    pub is_private: String,
    pub is_incomplete: String,
    /// Literal date string, or [`DEFAULT_PURCHASE_DATE`] when absent
    pub last_purchase_date: String,
    pub avg_ticket_value: f64,
    pub last_ticket_value: f64,
    /// Store document digits, or the literal `NULL`
    pub most_frequent_store_document: String,
    /// Store document digits, or the literal `NULL`
    pub last_purchase_store_document: String,
}

impl PersonRecord {
    /// Whether the person document has the digit count of a person document
    #[must_use]
    pub fn has_person_document_length(&self) -> bool {
        self.person_document.len() == DocumentKind::Person.length()
    }

    /// Most frequent store document, `None` for the sentinel
    #[must_use]
    pub fn most_frequent_store(&self) -> Option<&str> {
        non_sentinel(&self.most_frequent_store_document)
    }

    /// Last purchase store document, `None` for the sentinel
    #[must_use]
    pub fn last_purchase_store(&self) -> Option<&str> {
        non_sentinel(&self.last_purchase_store_document)
    }
}

/// Collapse whitespace runs and rejoin the tokens with `;`
///
/// This is the form every line is logged in for traceability.
#[must_use]
pub fn display_line(line: &str) -> String {
    line.split_whitespace().join(FIELD_SEPARATOR)
}

/// Parse one non-header line into a [`PersonRecord`]
///
/// A line with more than eight tokens is read as a person document written
/// with embedded spaces (`123 456 789-09`): the surplus leading tokens are
/// joined into the first field and the last seven tokens fill the rest.
pub fn parse_line(line: &str) -> Result<PersonRecord, ParseError> {
    let collapsed = display_line(line);
    let fields: Vec<&str> = collapsed.split(FIELD_SEPARATOR).collect();

    // An empty line still splits into one empty field
    if fields.len() < FIELD_COUNT {
        return Err(ParseError::MissingFields {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let (document_tokens, values) = fields.split_at(fields.len() - (FIELD_COUNT - 1));

    Ok(PersonRecord {
        person_document: document::normalize(&document_tokens.concat()),
        is_private: values[0].to_string(),
        is_incomplete: values[1].to_string(),
        last_purchase_date: parse_date(values[2]),
        avg_ticket_value: parse_amount("avg_ticket_value", values[3])?,
        last_ticket_value: parse_amount("last_ticket_value", values[4])?,
        most_frequent_store_document: parse_store_document(values[5]),
        last_purchase_store_document: parse_store_document(values[6]),
    })
}

fn parse_date(value: &str) -> String {
    if value == NULL_SENTINEL {
        DEFAULT_PURCHASE_DATE.to_string()
    } else {
        value.to_string()
    }
}

fn parse_amount(field: &'static str, value: &str) -> Result<f64, ParseError> {
    let value = value.replace(',', ".");
    if value == NULL_SENTINEL {
        return Ok(0.0);
    }

    match value.parse::<f64>() {
        // Out-of-range input parses to infinity; only a spelled-out infinity may
        Ok(number) if number.is_infinite() && !is_infinity_literal(&value) => {
            Err(ParseError::InvalidNumber { field, value })
        }
        Ok(number) => Ok(number),
        Err(_) => Err(ParseError::InvalidNumber { field, value }),
    }
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_store_document(value: &str) -> String {
    if value == NULL_SENTINEL {
        value.to_string()
    } else {
        document::normalize(value)
    }
}

fn non_sentinel(value: &str) -> Option<&str> {
    (value != NULL_SENTINEL).then_some(value)
}
