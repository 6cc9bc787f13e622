#![allow(dead_code)]
mod config;
mod db;
mod utils;

use std::env;
use color_eyre::Result;
use dotenv::dotenv;
use log::info;
use r2d2_sqlite::SqliteConnectionManager;
use getopts::Options;
use crate::db::Pool;
use crate::config::Config;

// Copy pasted this from getopts doc.
fn print_usage(program: &str, opts: Options) {
  let brief = format!("Usage: {} [options]", program);
  print!("{}", opts.usage(&brief));
}

/**
 * Binary that prepares the database: creates the tables,
 * optionally starting over from nothing, optionally
 * loading the demo content set.
 */
fn main() -> Result<()> {
  dotenv().ok();
  env_logger::init();

  let args: Vec<String> = env::args().collect();
  let program = args[0].clone();
  let mut opts = Options::new();
  opts.optflag("f", "force", "Drop existing tables first");
  opts.optflag("s", "sample-data", "Load the demo content set");
  opts.optflag("h", "help", "Program usage");
  let opt_matches = opts.parse(args)?;
  if opt_matches.opt_present("h") {
    print_usage(&program, opts);
    return Ok(());
  }

  let config = Config::from_env()
    .expect("Configuration (environment or .env file) is missing");
  let manager = SqliteConnectionManager::file(&config.db_path)
    .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
  let pool = Pool::new(manager)
    .expect("Database connection failed");

  if opt_matches.opt_present("f") {
    info!("Dropping existing tables from {}", &config.db_path);
    db::schema::drop_all_tables(&pool)?;
  }
  info!("Creating tables in {}", &config.db_path);
  db::schema::create_all_tables(&pool)?;
  if opt_matches.opt_present("s") {
    info!("Loading the demo content set");
    db::schema::seed_demo_data(&pool)?;
  }
  info!("Done");

  Ok(())
}
