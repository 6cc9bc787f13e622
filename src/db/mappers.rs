use super::entities::*;
use rusqlite::{Error, Row};

// One mapper per projection. Column order is part of
// the contract with the queries in the parent module,
// they have to stay in sync by hand.

pub fn map_topic(row: &Row) -> Result<Topic, Error> {
  Ok(Topic {
    slug: row.get(0)?,
    description: row.get(1)?
  })
}

pub fn map_user(row: &Row) -> Result<User, Error> {
  Ok(User {
    username: row.get(0)?,
    name: row.get(1)?,
    avatar_url: row.get(2)?
  })
}

// List projection: no body, comment count aggregated in.
pub fn map_article_summary(row: &Row) -> Result<Article, Error> {
  Ok(Article {
    article_id: row.get(0)?,
    title: row.get(1)?,
    author: row.get(2)?,
    topic: row.get(3)?,
    created_at: row.get(4)?,
    votes: row.get(5)?,
    comment_count: Some(row.get(6)?),
    body: None
  })
}

// Single article projection: everything, body included.
pub fn map_article_full(row: &Row) -> Result<Article, Error> {
  Ok(Article {
    article_id: row.get(0)?,
    title: row.get(1)?,
    author: row.get(2)?,
    topic: row.get(3)?,
    created_at: row.get(4)?,
    votes: row.get(5)?,
    body: Some(row.get(6)?),
    comment_count: Some(row.get(7)?)
  })
}

pub fn map_comment(row: &Row) -> Result<Comment, Error> {
  Ok(Comment {
    comment_id: row.get(0)?,
    article_id: row.get(1)?,
    author: row.get(2)?,
    body: row.get(3)?,
    votes: row.get(4)?,
    created_at: row.get(5)?
  })
}
