use rusqlite::{params, NO_PARAMS, OptionalExtension, Row, ToSql};
pub mod entities;
pub mod schema;
mod helpers;
mod mappers;
use eyre::WrapErr;
use color_eyre::Result;
use entities::*;
use helpers::{field_equals_placeholder, where_and_clause};
use mappers::*;
use crate::utils::time_utils::current_timestamp;

// Type alias to make function signatures much clearer:
pub type Pool = r2d2::Pool<r2d2_sqlite::SqliteConnectionManager>;

/**
 * All the DB access is plain blocking rusqlite. The queries
 * are quick enough that I'm not going to bother with a
 * thread pool dance for them.
 *
 * Sort columns arrive here as &'static str picked from the
 * allowlists in app::validate, so the format! calls below
 * never see client text. Filter values always go through
 * placeholders.
 */

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Order {
  Asc,
  Desc
}

impl Order {
  pub fn as_sql(&self) -> &'static str {
    match self {
      Order::Asc => "ASC",
      Order::Desc => "DESC"
    }
  }
}

// Stole most of the signature from the rusqlite doc.
// Careful to use a later version of the crate,
// Google takes you to old versions of the doc.
fn select_many<T, P, F>(
  pool: &Pool,
  query: &str,
  params: P,
  mapper: F
) -> Result<Vec<T>>
  where
    P: IntoIterator,
    P::Item: ToSql,
    F: FnMut(&Row<'_>) -> Result<T, rusqlite::Error>,
{
  let conn = pool.clone().get()?;
  let mut stmt = conn.prepare(query)?;
  stmt.query_map(params, mapper)
    .and_then(Iterator::collect)
    .context("Generic select_many query")
}

fn row_exists<P>(
  pool: &Pool,
  query: &str,
  params: P
) -> Result<bool>
  where
    P: IntoIterator,
    P::Item: ToSql,
{
  let conn = pool.clone().get()?;
  let mut stmt = conn.prepare(query)?;
  stmt.exists(params)
    .context("Generic row_exists query")
}

pub fn user_exists(
  pool: &Pool,
  username: &str
) -> Result<bool> {
  row_exists(
    pool,
    "SELECT 1 FROM users WHERE username = ?",
    params![username]
  )
}

pub fn topic_exists(
  pool: &Pool,
  slug: &str
) -> Result<bool> {
  row_exists(
    pool,
    "SELECT 1 FROM topics WHERE slug = ?",
    params![slug]
  )
}

pub fn article_exists(
  pool: &Pool,
  article_id: i64
) -> Result<bool> {
  row_exists(
    pool,
    "SELECT 1 FROM articles WHERE article_id = ?",
    params![article_id]
  )
}

pub fn all_topics(
  pool: &Pool
) -> Result<Vec<Topic>> {
  select_many(
    pool,
    "SELECT slug, description FROM topics ORDER BY slug ASC",
    NO_PARAMS,
    map_topic
  )
}

pub fn user_by_username(
  pool: &Pool,
  username: &str
) -> Result<Option<User>> {
  let conn = pool.clone().get()?;
  let mut stmt = conn.prepare(
    "SELECT username, name, avatar_url FROM users WHERE username = ?"
  )?;
  stmt.query_row(params![username], map_user)
    .optional()
    .context("Single user query")
}

// Article listings always carry the comment count, hence
// the LEFT JOIN: articles nobody commented on still have
// to show up, with a count of zero.
pub fn articles_filtered(
  pool: &Pool,
  sort_column: &str,
  order: Order,
  author: Option<&str>,
  topic: Option<&str>
) -> Result<Vec<Article>> {
  let mut clauses: Vec<String> = Vec::new();
  let mut params: Vec<&dyn ToSql> = Vec::new();
  if let Some(ref author) = author {
    clauses.push(field_equals_placeholder("articles.author"));
    params.push(author);
  }
  if let Some(ref topic) = topic {
    clauses.push(field_equals_placeholder("articles.topic"));
    params.push(topic);
  }
  // Secondary sort on the id keeps ties stable between runs.
  let query = format!(
    "SELECT articles.article_id, articles.title, articles.author, \
     articles.topic, articles.created_at, articles.votes, \
     count(comments.comment_id) AS comment_count \
     FROM articles \
     LEFT JOIN comments ON comments.article_id = articles.article_id \
     {}GROUP BY articles.article_id \
     ORDER BY {} {}, articles.article_id ASC",
    where_and_clause(&clauses),
    sort_column,
    order.as_sql()
  );
  select_many(pool, &query, params, map_article_summary)
}

pub fn article_with_comment_count(
  pool: &Pool,
  article_id: i64
) -> Result<Option<Article>> {
  let conn = pool.clone().get()?;
  let mut stmt = conn.prepare(
    "SELECT articles.article_id, articles.title, articles.author, \
     articles.topic, articles.created_at, articles.votes, articles.body, \
     count(comments.comment_id) AS comment_count \
     FROM articles \
     LEFT JOIN comments ON comments.article_id = articles.article_id \
     WHERE articles.article_id = ? \
     GROUP BY articles.article_id"
  )?;
  stmt.query_row(params![article_id], map_article_full)
    .optional()
    .context("Single article query")
}

pub fn comments_for_article(
  pool: &Pool,
  article_id: i64,
  sort_column: &str,
  order: Order
) -> Result<Vec<Comment>> {
  let query = format!(
    "SELECT comment_id, article_id, author, body, votes, created_at \
     FROM comments WHERE article_id = ? \
     ORDER BY {} {}, comment_id ASC",
    sort_column,
    order.as_sql()
  );
  select_many(pool, &query, params![article_id], map_comment)
}

pub fn comment_by_id(
  pool: &Pool,
  comment_id: i64
) -> Result<Option<Comment>> {
  let conn = pool.clone().get()?;
  let mut stmt = conn.prepare(
    "SELECT comment_id, article_id, author, body, votes, created_at \
     FROM comments WHERE comment_id = ?"
  )?;
  stmt.query_row(params![comment_id], map_comment)
    .optional()
    .context("Single comment query")
}

pub fn insert_comment(
  pool: &Pool,
  article_id: i64,
  username: &str,
  body: &str
) -> Result<Comment> {
  let conn = pool.clone().get()?;
  let created_at = current_timestamp();
  conn.execute(
    "INSERT INTO comments (article_id, author, body, votes, created_at) \
     VALUES (?, ?, ?, 0, ?)",
    params![article_id, username, body, created_at]
  )?;
  // Same connection as the insert, so this rowid is ours.
  Ok(Comment {
    comment_id: conn.last_insert_rowid(),
    article_id,
    author: username.to_string(),
    body: body.to_string(),
    votes: 0,
    created_at
  })
}

// The single UPDATE reads and writes the counter in one
// statement, so two racing votes both land. None means the
// article wasn't there to update.
pub fn increment_article_votes(
  pool: &Pool,
  article_id: i64,
  delta: i64
) -> Result<Option<Article>> {
  let affected = {
    let conn = pool.clone().get()?;
    conn.execute(
      "UPDATE articles SET votes = votes + ? WHERE article_id = ?",
      params![delta, article_id]
    )?
  };
  if affected == 0 {
    return Ok(None);
  }
  article_with_comment_count(pool, article_id)
}

pub fn increment_comment_votes(
  pool: &Pool,
  comment_id: i64,
  delta: i64
) -> Result<Option<Comment>> {
  let affected = {
    let conn = pool.clone().get()?;
    conn.execute(
      "UPDATE comments SET votes = votes + ? WHERE comment_id = ?",
      params![delta, comment_id]
    )?
  };
  if affected == 0 {
    return Ok(None);
  }
  comment_by_id(pool, comment_id)
}

pub fn delete_comment(
  pool: &Pool,
  comment_id: i64
) -> Result<bool> {
  let conn = pool.clone().get()?;
  let affected = conn.execute(
    "DELETE FROM comments WHERE comment_id = ?",
    params![comment_id]
  )?;
  Ok(affected > 0)
}

// Every get() on a max_size(1) pool hands back the same
// in-memory database, which is exactly what the tests want.
#[cfg(test)]
pub(crate) fn seeded_test_pool() -> Pool {
  let manager = r2d2_sqlite::SqliteConnectionManager::memory()
    .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
  let pool = r2d2::Pool::builder()
    .max_size(1)
    .build(manager)
    .expect("Building in-memory pool");
  schema::create_all_tables(&pool).expect("Creating tables");
  schema::seed_demo_data(&pool).expect("Seeding demo data");
  pool
}
