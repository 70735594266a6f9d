use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored book record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier for the book, assigned by the service on creation
    #[serde(rename = "ISBN")]
    pub isbn: String,
    /// Author of the book
    pub author: String,
    /// Title of the book
    pub title: String,
    /// Description of the book
    pub description: String,
    /// Publication date, ISO `YYYY-MM-DD`
    pub publication_date: NaiveDate,
    /// Whether the book is currently available
    pub available: bool,
}

impl Book {
    /// Attach an identifier to a validated payload
    pub fn from_payload(isbn: String, payload: BookPayload) -> Self {
        Self {
            isbn,
            author: payload.author,
            title: payload.title,
            description: payload.description,
            publication_date: payload.publication_date,
            available: payload.available,
        }
    }
}

/// The validated form of a create/update request body: every record field
/// except the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct BookPayload {
    pub author: String,
    pub title: String,
    pub description: String,
    pub publication_date: NaiveDate,
    pub available: bool,
}

/// Check a parsed request body against the record schema.
///
/// Collects one message per violated field instead of stopping at the first
/// failure, so a single response reports everything wrong with the payload.
pub fn validate(value: &Value) -> Result<BookPayload, Vec<String>> {
    let mut violations = Vec::new();

    let author = require_string(value, "author", &mut violations);
    let title = require_string(value, "title", &mut violations);
    let description = require_string(value, "description", &mut violations);
    let publication_date = require_date(value, "publication_date", &mut violations);
    let available = require_bool(value, "available", &mut violations);

    match (author, title, description, publication_date, available) {
        (Some(author), Some(title), Some(description), Some(publication_date), Some(available)) => {
            Ok(BookPayload {
                author,
                title,
                description,
                publication_date,
                available,
            })
        }
        _ => Err(violations),
    }
}

fn require_string(value: &Value, field: &str, violations: &mut Vec<String>) -> Option<String> {
    match value.get(field).and_then(Value::as_str) {
        Some(raw) if !raw.is_empty() => Some(raw.to_string()),
        _ => {
            violations.push(format!("{field} must be a non-empty string"));
            None
        }
    }
}

fn require_date(value: &Value, field: &str, violations: &mut Vec<String>) -> Option<NaiveDate> {
    match value
        .get(field)
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse::<NaiveDate>().ok())
    {
        Some(date) => Some(date),
        None => {
            violations.push(format!("{field} must be a valid date"));
            None
        }
    }
}

fn require_bool(value: &Value, field: &str, violations: &mut Vec<String>) -> Option<bool> {
    match value.get(field).and_then(Value::as_bool) {
        Some(flag) => Some(flag),
        None => {
            violations.push(format!("{field} must be a boolean"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "author": "Ursula K. Le Guin",
            "title": "The Dispossessed",
            "description": "An ambiguous utopia",
            "publication_date": "1974-05-01",
            "available": true
        })
    }

    #[test]
    fn test_valid_body_normalizes() {
        let payload = validate(&valid_body()).unwrap();
        assert_eq!(payload.author, "Ursula K. Le Guin");
        assert_eq!(
            payload.publication_date,
            "1974-05-01".parse::<NaiveDate>().unwrap()
        );
        assert!(payload.available);
    }

    #[rstest]
    #[case::missing_author("author", "author must be a non-empty string")]
    #[case::missing_title("title", "title must be a non-empty string")]
    #[case::missing_description("description", "description must be a non-empty string")]
    #[case::missing_date("publication_date", "publication_date must be a valid date")]
    #[case::missing_available("available", "available must be a boolean")]
    fn test_missing_field_is_one_violation(#[case] field: &str, #[case] expected: &str) {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove(field);

        let violations = validate(&body).unwrap_err();
        assert_eq!(violations, vec![expected.to_string()]);
    }

    #[rstest]
    #[case::empty_author("author", json!(""))]
    #[case::numeric_title("title", json!(42))]
    #[case::null_description("description", json!(null))]
    #[case::unparseable_date("publication_date", json!("not-a-date"))]
    #[case::numeric_date("publication_date", json!(20200101))]
    #[case::stringy_available("available", json!("yes"))]
    fn test_wrong_type_is_one_violation(#[case] field: &str, #[case] bad: Value) {
        let mut body = valid_body();
        body[field] = bad;

        let violations = validate(&body).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].starts_with(field));
    }

    #[test]
    fn test_empty_body_collects_every_violation() {
        let violations = validate(&json!({})).unwrap_err();
        assert_eq!(violations.len(), 5);
    }

    #[test]
    fn test_record_serializes_isbn_key_uppercase() {
        let book = Book::from_payload("isbn-1".to_string(), validate(&valid_body()).unwrap());
        let value = serde_json::to_value(&book).unwrap();

        assert_eq!(value["ISBN"], "isbn-1");
        assert_eq!(value["publication_date"], "1974-05-01");
        assert!(value.get("isbn").is_none());
    }
}
