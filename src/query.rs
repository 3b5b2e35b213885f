//! Turns the raw query string of a list request into [`ListQueryParams`].

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::FieldError;
use crate::models::{ListFilter, ListQueryParams};

/// Value of `time` that asks for no overdue filtering.
pub const NO_FILTER_SENTINEL: &str = "0000:00:00";

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    pub page: i64,
    pub limit: i64,
}

/// Parses `page`, `limit` and `time`. Every bad field is reported, not just the first.
pub fn parse_list_query(
    pairs: &[(String, String)],
    defaults: Defaults,
) -> Result<ListQueryParams, Vec<FieldError>> {
    let mut errors = Vec::new();

    let page = positive(first(pairs, "page"), "page", defaults.page, &mut errors);
    let limit = positive(first(pairs, "limit"), "limit", defaults.limit, &mut errors);

    let filter = match first(pairs, "time") {
        None | Some(NO_FILTER_SENTINEL) => ListFilter::NoFilter,
        Some(raw) if is_valid_time(raw) => ListFilter::Overdue(raw.to_string()),
        Some(_) => {
            errors.push(FieldError {
                field: "time",
                message: "must be a date (YYYY-MM-DD) or RFC 3339 timestamp",
            });
            ListFilter::NoFilter
        }
    };

    if errors.is_empty() {
        Ok(ListQueryParams {
            page,
            limit,
            filter,
        })
    } else {
        Err(errors)
    }
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn positive(
    raw: Option<&str>,
    field: &'static str,
    default: i64,
    errors: &mut Vec<FieldError>,
) -> i64 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => n,
        _ => {
            errors.push(FieldError {
                field,
                message: "must be a positive integer",
            });
            default
        }
    }
}

fn is_valid_time(raw: &str) -> bool {
    Date::parse(raw, DATE_FORMAT).is_ok() || OffsetDateTime::parse(raw, &Rfc3339).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: Defaults = Defaults { page: 1, limit: 10 };

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_query_uses_defaults() {
        let params = parse_list_query(&[], DEFAULTS).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.filter, ListFilter::NoFilter);
    }

    #[test]
    fn explicit_pagination() {
        let params = parse_list_query(&pairs(&[("page", "3"), ("limit", "50")]), DEFAULTS).unwrap();
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 50);
    }

    #[test]
    fn sentinel_means_no_filter() {
        let params = parse_list_query(&pairs(&[("time", NO_FILTER_SENTINEL)]), DEFAULTS).unwrap();
        assert_eq!(params.filter, ListFilter::NoFilter);
    }

    #[test]
    fn date_selects_overdue() {
        let params = parse_list_query(&pairs(&[("time", "2023-01-01")]), DEFAULTS).unwrap();
        assert_eq!(params.filter, ListFilter::Overdue("2023-01-01".to_string()));
    }

    #[test]
    fn rfc3339_selects_overdue() {
        let params =
            parse_list_query(&pairs(&[("time", "2023-01-01T10:00:00Z")]), DEFAULTS).unwrap();
        assert_eq!(
            params.filter,
            ListFilter::Overdue("2023-01-01T10:00:00Z".to_string())
        );
    }

    #[test]
    fn all_bad_fields_are_reported() {
        let errors = parse_list_query(
            &pairs(&[("page", "abc"), ("limit", "-4"), ("time", "yesterday")]),
            DEFAULTS,
        )
        .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["page", "limit", "time"]);
    }

    #[test]
    fn zero_is_not_positive() {
        let errors = parse_list_query(&pairs(&[("page", "0")]), DEFAULTS).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "page: must be a positive integer");
    }

    #[test]
    fn first_value_wins() {
        let params = parse_list_query(&pairs(&[("page", "2"), ("page", "x")]), DEFAULTS).unwrap();
        assert_eq!(params.page, 2);
    }

    #[test]
    fn impossible_date_is_rejected() {
        assert!(parse_list_query(&pairs(&[("time", "2023-02-30")]), DEFAULTS).is_err());
    }
}
