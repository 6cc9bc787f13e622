use actix_web::{
  web,
  HttpResponse,
  Result
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::db;
use super::dtos::*;
use super::error::{Error, map_db_error};
use super::validate;
use super::AppState;

// Module with all the API handler functions. They stay
// thin on purpose: validate, hit the db module, wrap the
// result in its envelope.

/* --- Request body or query objects --- */
// These have to be public.
#[derive(Serialize, Deserialize)]
pub struct ArticlesQuery {
  pub sort_by: Option<String>,
  pub order_by: Option<String>,
  // The author filter rides in as "username" on the wire.
  pub username: Option<String>,
  pub topic: Option<String>
}

#[derive(Serialize, Deserialize)]
pub struct CommentsQuery {
  pub sort_by: Option<String>,
  pub order_by: Option<String>
}

#[derive(Deserialize)]
pub struct VoteBody {
  pub inc_votes: Option<i64>
}

#[derive(Deserialize)]
pub struct NewCommentBody {
  pub username: Option<String>,
  pub body: Option<String>
}
/* --- End request body or query objects --- */

// Tiny self-description, handy when poking around with
// curl and you forget a route:
pub async fn index() -> HttpResponse {
  HttpResponse::Ok().json(json!({
    "endpoints": [
      "GET /api",
      "GET /api/topics",
      "GET /api/users/{username}",
      "GET /api/articles",
      "GET /api/articles/{article_id}",
      "PATCH /api/articles/{article_id}",
      "GET /api/articles/{article_id}/comments",
      "POST /api/articles/{article_id}/comments",
      "PATCH /api/comments/{comment_id}",
      "DELETE /api/comments/{comment_id}"
    ]
  }))
}

// Default response when no route matched the request:
pub async fn not_found() -> Result<HttpResponse, Error> {
  Err(Error::RouteNotFound)
}

// Known path, wrong verb:
pub async fn method_not_allowed() -> Result<HttpResponse, Error> {
  Err(Error::MethodNotAllowed)
}

pub async fn topics(
  app_state: web::Data<AppState>
) -> Result<HttpResponse, Error> {
  let topics = db::all_topics(&app_state.pool).map_err(map_db_error)?;
  Ok(HttpResponse::Ok().json(TopicsBody { topics }))
}

// Path variables have to be in a tuple.
pub async fn user_by_username(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>
) -> Result<HttpResponse, Error> {
  let username = path.into_inner().0;
  let user = db::user_by_username(&app_state.pool, &username)
    .map_err(map_db_error)?;
  match user {
    Some(user) => Ok(HttpResponse::Ok().json(UserBody::single(user))),
    None => Err(Error::UserNotFound)
  }
}

pub async fn articles(
  app_state: web::Data<AppState>,
  query: web::Query<ArticlesQuery>
) -> Result<HttpResponse, Error> {
  let sort_column = validate::article_sort_column(query.sort_by.as_deref())?;
  let order = validate::sort_order(query.order_by.as_deref())?;
  let author = validate::non_empty(&query.username);
  let topic = validate::non_empty(&query.topic);

  // An empty list is only a valid answer when the filter
  // target actually exists, otherwise it's a 404:
  if let Some(author) = author {
    if !db::user_exists(&app_state.pool, author).map_err(map_db_error)? {
      return Err(Error::UserNotFound);
    }
  }
  if let Some(topic) = topic {
    if !db::topic_exists(&app_state.pool, topic).map_err(map_db_error)? {
      return Err(Error::TopicNotFound);
    }
  }

  let articles: Vec<ArticleDto> = db::articles_filtered(
    &app_state.pool,
    sort_column,
    order,
    author,
    topic
  )
    .map_err(map_db_error)?
    .into_iter()
    .map(|a| a.into())
    .collect();
  Ok(HttpResponse::Ok().json(ArticlesBody { articles }))
}

pub async fn article_by_id(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>
) -> Result<HttpResponse, Error> {
  let article_id = validate::id_from_path(&path.into_inner().0)?;
  let article = db::article_with_comment_count(&app_state.pool, article_id)
    .map_err(map_db_error)?;
  match article {
    Some(article) => {
      Ok(HttpResponse::Ok().json(ArticleBody::single(article.into())))
    },
    None => Err(Error::NotFound("Invalid ID".to_string()))
  }
}

pub async fn patch_article_votes(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>,
  body: web::Json<VoteBody>
) -> Result<HttpResponse, Error> {
  let article_id = validate::id_from_path(&path.into_inner().0)?;
  let delta = body.inc_votes.ok_or_else(|| Error::MissingFields(
    "Bad request: missing required fields".to_string()
  ))?;
  let article = db::increment_article_votes(&app_state.pool, article_id, delta)
    .map_err(map_db_error)?;
  match article {
    Some(article) => Ok(HttpResponse::Ok().json(ArticleBody::single(
      ArticleDto::from(article).without_comment_count()
    ))),
    None => Err(Error::NotFound("Invalid ID - does not match".to_string()))
  }
}

pub async fn comments_for_article(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>,
  query: web::Query<CommentsQuery>
) -> Result<HttpResponse, Error> {
  let article_id = validate::id_from_path(&path.into_inner().0)?;
  let sort_column = validate::comment_sort_column(query.sort_by.as_deref())?;
  let order = validate::sort_order(query.order_by.as_deref())?;
  // No comments could mean a quiet article or no article
  // at all, only one of those is an error:
  if !db::article_exists(&app_state.pool, article_id).map_err(map_db_error)? {
    return Err(Error::NotFound("Invalid ID - does not match".to_string()));
  }
  let comments: Vec<CommentDto> = db::comments_for_article(
    &app_state.pool,
    article_id,
    sort_column,
    order
  )
    .map_err(map_db_error)?
    .into_iter()
    .map(|c| CommentDto::from(c).remove_article_id())
    .collect();
  Ok(HttpResponse::Ok().json(CommentsBody { comments }))
}

pub async fn post_comment(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>,
  body: web::Json<NewCommentBody>
) -> Result<HttpResponse, Error> {
  let article_id = validate::id_from_path(&path.into_inner().0)?;
  let username = validate::non_empty(&body.username);
  let comment_body = validate::non_empty(&body.body);
  let (username, comment_body) = match (username, comment_body) {
    (Some(username), Some(comment_body)) => (username, comment_body),
    _ => {
      return Err(Error::MissingFields(
        "Invalid request: missing required fields".to_string()
      ));
    }
  };
  // Checked up front so a missing article comes back as a
  // 404 instead of a constraint error dressed up as a 400:
  if !db::article_exists(&app_state.pool, article_id).map_err(map_db_error)? {
    return Err(Error::NotFound("Article does not exist".to_string()));
  }
  let comment = db::insert_comment(
    &app_state.pool,
    article_id,
    username,
    comment_body
  ).map_err(map_db_error)?;
  Ok(HttpResponse::Created().json(CommentBody::single(comment.into())))
}

pub async fn patch_comment_votes(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>,
  body: web::Json<VoteBody>
) -> Result<HttpResponse, Error> {
  let comment_id = validate::id_from_path(&path.into_inner().0)?;
  let delta = body.inc_votes.ok_or_else(|| Error::MissingFields(
    "Bad request: missing required fields".to_string()
  ))?;
  let comment = db::increment_comment_votes(&app_state.pool, comment_id, delta)
    .map_err(map_db_error)?;
  match comment {
    Some(comment) => Ok(HttpResponse::Ok().json(
      UpdatedCommentBody::single(comment.into())
    )),
    None => Err(Error::NotFound("Invalid ID - does not match".to_string()))
  }
}

pub async fn delete_comment(
  app_state: web::Data<AppState>,
  path: web::Path<(String,)>
) -> Result<HttpResponse, Error> {
  let comment_id = validate::id_from_path(&path.into_inner().0)?;
  let deleted = db::delete_comment(&app_state.pool, comment_id)
    .map_err(map_db_error)?;
  if deleted {
    Ok(HttpResponse::NoContent().finish())
  } else {
    Err(Error::NotFound("Not Found - invalid ID".to_string()))
  }
}
