use actix_web::{middleware, web, App, HttpServer};
use actix_cors::Cors;
use r2d2_sqlite::SqliteConnectionManager;
use color_eyre::Result;
use eyre::WrapErr;
use log::{debug, info};
// We have to add crate here because of the other
// crate named "config" that we use as a dependency.
use crate::config::Config;
use crate::db::{self, Pool};
use error::Error;
mod handlers;
mod dtos;
mod error;
mod validate;

// Declare app state struct:
pub struct AppState {
  pub pool: Pool
}

// Function to start the server.
// Has to be async because there should be a .await at the
// end, the #[actix_web::main] decorator sits in main.rs.
pub async fn run() -> Result<()> {
  let config = Config::from_env()
    .expect("Configuration (environment or .env file) is missing");
  debug!("Current config: {:?}", config);
  let manager = SqliteConnectionManager::file(&config.db_path)
    .with_init(|conn| {
      // Foreign keys are off in SQLite unless asked for,
      // and the busy timeout keeps concurrent writers
      // from erroring out instead of waiting their turn.
      conn.execute_batch(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;"
      )
    });
  let pool = Pool::new(manager)
    .expect("Database connection failed");
  // First boot on an empty file still gets its tables:
  db::schema::create_all_tables(&pool)?;

  info!("Starting server on {}", &config.bind_address);
  let bind_address = config.bind_address.clone();
  let app_state = web::Data::new(AppState { pool });

  HttpServer::new(move || {
    App::new()
      .app_data(app_state.clone())
      .wrap(middleware::Logger::default())
      // The frontend is served from a different origin,
      // and everything here is public data anyway:
      .wrap(
        Cors::default()
          .allow_any_origin()
          .allow_any_method()
          .allow_any_header()
      )
      .configure(api_endpoints_config)
      .default_service(web::route().to(handlers::not_found))
  })
  .bind(bind_address)?
  .run()
  .await
  .context("Start Actix web server")
}

// Route configuration. Every resource ends with a bare
// route so known paths answer 405 instead of falling
// through to the 404 catch-all.
fn api_endpoints_config(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .app_data(web::JsonConfig::default().error_handler(|_, _| {
        // Unreadable bodies all get the same flat 400:
        Error::MalformedIdentifier.into()
      }))
      .app_data(web::QueryConfig::default().error_handler(|_, _| {
        Error::MalformedIdentifier.into()
      }))
      .service(
        web::resource("")
          .route(web::get().to(handlers::index))
          .route(web::route().to(handlers::method_not_allowed))
      )
      .service(
        web::resource("/topics")
          .route(web::get().to(handlers::topics))
          .route(web::route().to(handlers::method_not_allowed))
      )
      .service(
        web::resource("/users/{username}")
          .route(web::get().to(handlers::user_by_username))
          .route(web::route().to(handlers::method_not_allowed))
      )
      .service(
        web::resource("/articles")
          .route(web::get().to(handlers::articles))
          .route(web::route().to(handlers::method_not_allowed))
      )
      .service(
        web::resource("/articles/{article_id}")
          .route(web::get().to(handlers::article_by_id))
          .route(web::patch().to(handlers::patch_article_votes))
          .route(web::route().to(handlers::method_not_allowed))
      )
      .service(
        web::resource("/articles/{article_id}/comments")
          .route(web::get().to(handlers::comments_for_article))
          .route(web::post().to(handlers::post_comment))
          .route(web::route().to(handlers::method_not_allowed))
      )
      .service(
        web::resource("/comments/{comment_id}")
          .route(web::patch().to(handlers::patch_comment_votes))
          .route(web::delete().to(handlers::delete_comment))
          .route(web::route().to(handlers::method_not_allowed))
      )
      .default_service(web::route().to(handlers::not_found))
  );
}
