use lazy_static::lazy_static;
use std::collections::HashMap;
use crate::db::Order;
use super::error::Error;

/**
 * Everything client-controlled that could end up inside a
 * query string gets checked here first. Sort fields map
 * to a fixed column reference through the tables below,
 * the client token itself never reaches the SQL.
 */

lazy_static! {
  static ref ARTICLE_SORT_COLUMNS: HashMap<&'static str, &'static str> = {
    let mut columns = HashMap::new();
    columns.insert("article_id", "articles.article_id");
    columns.insert("title", "articles.title");
    columns.insert("author", "articles.author");
    columns.insert("topic", "articles.topic");
    columns.insert("created_at", "articles.created_at");
    columns.insert("votes", "articles.votes");
    // The aggregate alias, not a real column:
    columns.insert("comment_count", "comment_count");
    columns
  };
  static ref COMMENT_SORT_COLUMNS: HashMap<&'static str, &'static str> = {
    let mut columns = HashMap::new();
    columns.insert("comment_id", "comment_id");
    columns.insert("author", "author");
    columns.insert("body", "body");
    columns.insert("votes", "votes");
    columns.insert("created_at", "created_at");
    columns
  };
}

fn sort_column(
  columns: &HashMap<&'static str, &'static str>,
  candidate: Option<&str>,
  default: &'static str
) -> Result<&'static str, Error> {
  match candidate {
    // Absent and empty both mean "use the default".
    None | Some("") => Ok(default),
    Some(name) => columns.get(name).copied().ok_or(Error::InvalidSort)
  }
}

pub fn article_sort_column(candidate: Option<&str>) -> Result<&'static str, Error> {
  sort_column(&ARTICLE_SORT_COLUMNS, candidate, "articles.created_at")
}

pub fn comment_sort_column(candidate: Option<&str>) -> Result<&'static str, Error> {
  sort_column(&COMMENT_SORT_COLUMNS, candidate, "created_at")
}

pub fn sort_order(candidate: Option<&str>) -> Result<Order, Error> {
  match candidate {
    None | Some("") => Ok(Order::Desc),
    Some(direction) => match direction.to_lowercase().as_str() {
      "asc" | "ascending" => Ok(Order::Asc),
      "desc" | "descending" => Ok(Order::Desc),
      _ => Err(Error::InvalidOrder)
    }
  }
}

// Path ids arrive as strings, anything that isn't an
// integer is the client's problem.
pub fn id_from_path(raw: &str) -> Result<i64, Error> {
  raw.parse::<i64>().map_err(|_| Error::MalformedIdentifier)
}

// "?username=" should behave like no author filter at all.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}
