//! Filtering and paging for the blog list.

use rusqlite::{Connection, params_from_iter, types::Value};
use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339,
    macros::{format_description, time},
};

use crate::{
    Error,
    blog::{
        Blog, BlogListQuery,
        db::{BLOG_COLUMNS, map_row},
    },
    database_id::{CategoryId, UserId},
    db::FOLD_CASE_FUNCTION,
    pagination::{Page, PaginationConfig},
    timestamp::to_nanos_saturating,
};

/// The blogs to return from a list request.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogFilter {
    pub user_id: UserId,
    pub category_id: CategoryId,
    /// Only include blogs whose title or description contains this text, ignoring case.
    pub keyword: Option<String>,
    /// Only include blogs created at or after this time.
    pub start: Option<OffsetDateTime>,
    /// Only include blogs created at or before this time.
    pub end: Option<OffsetDateTime>,
    pub page: Page,
}

impl BlogFilter {
    /// Build a filter from the optional parts of a list request.
    ///
    /// # Errors
    ///
    /// Returns [Error::Validation] if a date, the page or the limit cannot be parsed.
    pub fn from_query(
        user_id: UserId,
        category_id: CategoryId,
        query: &BlogListQuery,
        config: &PaginationConfig,
    ) -> Result<Self, Error> {
        let start = query
            .start_date
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(parse_start_date)
            .transpose()?;
        let end = query
            .end_date
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(parse_end_date)
            .transpose()?;
        let page = Page::parse(query.page.as_deref(), query.limit.as_deref(), config)?;
        let keyword = query
            .search_keyword
            .clone()
            .filter(|keyword| !keyword.is_empty());

        Ok(Self {
            user_id,
            category_id,
            keyword,
            start,
            end,
            page,
        })
    }
}

/// Parse the lower bound of a date range.
///
/// A bare `YYYY-MM-DD` date means midnight UTC at the start of that day.
pub fn parse_start_date(raw: &str) -> Result<OffsetDateTime, Error> {
    parse_date_time(raw, false).ok_or_else(|| Error::Validation("Invalid start date".to_owned()))
}

/// Parse the upper bound of a date range.
///
/// A bare `YYYY-MM-DD` date includes the whole of that day in UTC.
pub fn parse_end_date(raw: &str) -> Result<OffsetDateTime, Error> {
    parse_date_time(raw, true).ok_or_else(|| Error::Validation("Invalid end date".to_owned()))
}

fn parse_date_time(raw: &str, end_of_day: bool) -> Option<OffsetDateTime> {
    let raw = raw.trim();

    if let Ok(date_time) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(date_time);
    }

    let date = Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()?;
    let time = if end_of_day {
        time!(23:59:59.999_999_999)
    } else {
        time!(0:00)
    };

    Some(date.with_time(time).assume_utc())
}

/// Get the page of blogs matching `filter`, oldest first.
///
/// Blogs created at the same instant are returned in insertion order.
/// `connection` must have the application's SQL functions registered, see
/// [crate::db::register_functions].
///
/// # Errors
///
/// Returns [Error::SqlError] if the query fails.
pub fn query_blogs(filter: &BlogFilter, connection: &Connection) -> Result<Vec<Blog>, Error> {
    let mut where_clause_parts = vec!["user_id = ?".to_owned(), "category_id = ?".to_owned()];
    let mut query_parameters = vec![
        Value::Text(filter.user_id.to_hex()),
        Value::Text(filter.category_id.to_hex()),
    ];

    if let Some(keyword) = &filter.keyword {
        let keyword = keyword.to_lowercase();
        where_clause_parts.push(format!(
            "(instr({FOLD_CASE_FUNCTION}(title), ?) > 0 \
            OR instr({FOLD_CASE_FUNCTION}(description), ?) > 0)"
        ));
        query_parameters.push(Value::Text(keyword.clone()));
        query_parameters.push(Value::Text(keyword));
    }

    if let Some(start) = filter.start {
        where_clause_parts.push("created_at >= ?".to_owned());
        query_parameters.push(Value::Integer(to_nanos_saturating(start)));
    }

    if let Some(end) = filter.end {
        where_clause_parts.push("created_at <= ?".to_owned());
        query_parameters.push(Value::Integer(to_nanos_saturating(end)));
    }

    query_parameters.push(Value::Integer(
        i64::try_from(filter.page.size).unwrap_or(i64::MAX),
    ));
    query_parameters.push(Value::Integer(
        i64::try_from(filter.page.offset()).unwrap_or(i64::MAX),
    ));

    let query_string = format!(
        "SELECT {BLOG_COLUMNS} FROM blog WHERE {} \
        ORDER BY created_at ASC, rowid ASC LIMIT ? OFFSET ?",
        where_clause_parts.join(" AND ")
    );

    connection
        .prepare(&query_string)?
        .query_map(params_from_iter(query_parameters.iter()), map_row)?
        .map(|maybe_blog| maybe_blog.map_err(|error| error.into()))
        .collect()
}
