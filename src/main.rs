mod app;
mod config;
mod db;
mod utils;

use color_eyre::Result;

#[actix_web::main]
async fn main() -> Result<()> {
  dotenv::dotenv().ok();
  // Default to info level logging when nothing asked
  // for anything else. Has to happen here and not in
  // the config module, env_logger reads the variable
  // once at init.
  if std::env::var("RUST_LOG").is_err() {
    std::env::set_var("RUST_LOG", "info");
  }
  env_logger::init();

  app::run().await
}
