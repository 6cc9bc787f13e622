use serde::{Deserialize, Serialize};
use crate::db::entities::*;
use crate::utils::time_utils;

// Entities turn into DTOs through the From trait, the
// only real work is formatting the timestamps for the
// wire.

// Topics and users go out exactly as stored, so the
// entities can double as their own DTOs:
pub use crate::db::entities::{Topic as TopicDto, User as UserDto};

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleDto {
  pub article_id: i64,
  pub title: String,
  pub author: String,
  pub topic: String,
  pub created_at: String,
  pub votes: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment_count: Option<i64>
}

impl From<Article> for ArticleDto {
  fn from(article: Article) -> Self {
    Self {
      article_id: article.article_id,
      title: article.title,
      author: article.author,
      topic: article.topic,
      created_at: time_utils::timestamp_to_iso_string(article.created_at),
      votes: article.votes,
      body: article.body,
      comment_count: article.comment_count
    }
  }
}

impl ArticleDto {
  // Vote responses never carried the count in the old API
  // and I'm not about to surprise anyone's frontend.
  pub fn without_comment_count(mut self) -> Self {
    self.comment_count = None;
    self
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentDto {
  pub comment_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub article_id: Option<i64>,
  pub author: String,
  pub body: String,
  pub votes: i64,
  pub created_at: String
}

impl From<Comment> for CommentDto {
  fn from(comment: Comment) -> Self {
    Self {
      comment_id: comment.comment_id,
      article_id: Some(comment.article_id),
      author: comment.author,
      body: comment.body,
      votes: comment.votes,
      created_at: time_utils::timestamp_to_iso_string(comment.created_at)
    }
  }
}

// When listing the comments of one article, repeating the
// article's own id on every row is just wasted bytes.
impl CommentDto {
  pub fn remove_article_id(mut self) -> Self {
    self.article_id = None;
    self
  }
}

/* --- Response envelopes --- */
// Every payload sits in an object keyed by the resource
// name, and single resources still come back as
// one-element arrays. Clients index [0] all over the
// place, so this shape is load-bearing.

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicsBody {
  pub topics: Vec<TopicDto>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserBody {
  pub user: Vec<UserDto>
}

impl UserBody {
  pub fn single(user: UserDto) -> Self {
    Self { user: vec![user] }
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticlesBody {
  pub articles: Vec<ArticleDto>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleBody {
  pub article: Vec<ArticleDto>
}

impl ArticleBody {
  pub fn single(article: ArticleDto) -> Self {
    Self { article: vec![article] }
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentsBody {
  pub comments: Vec<CommentDto>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentBody {
  pub comment: Vec<CommentDto>
}

impl CommentBody {
  pub fn single(comment: CommentDto) -> Self {
    Self { comment: vec![comment] }
  }
}

// The one camelCase key in the whole API. Historical.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedCommentBody {
  #[serde(rename = "updatedComment")]
  pub updated_comment: Vec<CommentDto>
}

impl UpdatedCommentBody {
  pub fn single(comment: CommentDto) -> Self {
    Self {
      updated_comment: vec![comment]
    }
  }
}
