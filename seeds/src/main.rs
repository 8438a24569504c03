use std::env;
use std::process;

use dotenv::dotenv;
use log::{error, info};

use db::{get_conn, new_pool, seed};

fn main() {
    dotenv().ok();
    env_logger::init();

    let path = env::var("QUESTIONS_FILE").unwrap_or_else(|_| seed::DEFAULT_SEED_PATH.to_string());

    let pool = new_pool();
    let conn = get_conn(&pool).expect("failed to get a database connection");

    match seed::run_from_file(&conn, &path) {
        Ok(count) => info!("Seeded {} questions from {}", count, path),
        Err(err) => {
            error!("Seed failed: {}", err);
            process::exit(1);
        }
    }
}
