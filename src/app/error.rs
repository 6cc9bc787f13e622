use actix_web::{
  error::ResponseError,
  HttpResponse
};
use color_eyre::Report;
use derive_more::Display;
use log::error;
use serde::Serialize;

// The display strings below are the API contract, clients
// match on them verbatim. Change one and you break every
// frontend that talks to this thing.
#[derive(Debug, Display, PartialEq)]
pub enum Error {
  #[display(fmt = "Invalid request: missing required fields")]
  InvalidSort,
  #[display(fmt = "Invalid order by requested, please amend to either \"asc\" or \"desc\"")]
  InvalidOrder,
  // Covers ids that aren't numbers, wherever they show up.
  #[display(fmt = "Bad request: missing required fields")]
  MalformedIdentifier,
  #[display(fmt = "{}", _0)]
  MissingFields(String),
  #[display(fmt = "User does not exist")]
  UserNotFound,
  #[display(fmt = "Topic does not exist")]
  TopicNotFound,
  // The 404 wording differs per endpoint, the handler
  // picks the message.
  #[display(fmt = "{}", _0)]
  NotFound(String),
  #[display(fmt = "Route not found")]
  RouteNotFound,
  #[display(fmt = "Method not allowed")]
  MethodNotAllowed,
  // The payload is for the logs. Random internet people
  // only ever see the generic display string.
  #[display(fmt = "Internal server error")]
  DatabaseError(String)
}

// All error responses share the {"msg": ...} shape.
#[derive(Serialize)]
struct ErrorBody {
  msg: String
}

impl ResponseError for Error {
  fn error_response(&self) -> HttpResponse {
    let body = ErrorBody {
      msg: self.to_string()
    };
    match self {
      Error::InvalidSort
      | Error::InvalidOrder
      | Error::MalformedIdentifier
      | Error::MissingFields(_) => HttpResponse::BadRequest().json(body),
      Error::UserNotFound
      | Error::TopicNotFound
      | Error::NotFound(_)
      | Error::RouteNotFound => HttpResponse::NotFound().json(body),
      Error::MethodNotAllowed => HttpResponse::MethodNotAllowed().json(body),
      Error::DatabaseError(_) => HttpResponse::InternalServerError().json(body)
    }
  }
}

// Everything the db module returns funnels through here.
// Constraint failures mean the client sent a row that
// can't exist (unknown author, NULL body) and get a 400,
// the rest stays a 500 with the details kept to the logs.
pub fn map_db_error(err: Report) -> Error {
  if let Some(rusqlite::Error::SqliteFailure(failure, _)) =
    err.downcast_ref::<rusqlite::Error>()
  {
    if failure.code == rusqlite::ffi::ErrorCode::ConstraintViolation {
      return Error::MissingFields(
        "Invalid request: missing required fields".to_string()
      );
    }
  }
  error!("Database error: {:?}", err);
  Error::DatabaseError(err.to_string())
}
