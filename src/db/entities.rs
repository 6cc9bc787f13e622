use serde::{Deserialize, Serialize};

// Ultra simple datatypes, which is something SQLite
// fits naturally into. Timestamps stay as unix epoch
// integers in here, the DTO layer turns them into
// strings for the JSON output.

// Topics and users go out on the wire exactly as they
// are stored, the dtos module just re-exports them.

#[derive(Debug, Serialize, Deserialize)]
pub struct Topic {
  pub slug: String,
  pub description: String
}

#[derive(Debug, Serialize, Deserialize)]
pub struct User {
  pub username: String,
  pub name: String,
  pub avatar_url: String
}

// body and comment_count depend on which query built
// the row: list queries skip the body, vote updates
// skip the count. Hence the Options.
#[derive(Debug, Serialize, Deserialize)]
pub struct Article {
  pub article_id: i64,
  pub title: String,
  pub author: String,
  pub topic: String,
  pub created_at: i64,
  pub votes: i64,
  pub body: Option<String>,
  pub comment_count: Option<i64>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
  pub comment_id: i64,
  pub article_id: i64,
  pub author: String,
  pub body: String,
  pub votes: i64,
  pub created_at: i64
}
