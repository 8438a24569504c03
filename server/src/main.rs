#[macro_use]
extern crate log;
#[macro_use]
extern crate validator_derive;

use std::env;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;

mod routes;
mod tests;
mod validate;

use crate::routes::{json_config, routes};
use db::{get_conn, seed};
use errors::ErrorResponse;

fn seed_questions(pool: &db::PgPool) {
    let path = env::var("QUESTIONS_FILE").unwrap_or_else(|_| seed::DEFAULT_SEED_PATH.to_string());

    // Seed failures are logged but never block startup; the service can
    // still answer votes for whatever is already in the table.
    match get_conn(pool) {
        Ok(conn) => match seed::run_from_file(&conn, &path) {
            Ok(count) => info!("Seeded {} questions from {}", count, path),
            Err(err) => error!("Seed failed: {}", err),
        },
        Err(err) => error!("Seed skipped, no database connection: {}", err),
    }
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool();
    seed_questions(&pool);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "./public".to_string());

    info!("Listening on 0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(json_config())
            .configure(routes)
            .service(Files::new("/", public_dir.clone()).index_file("index.html"))
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
            }))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
