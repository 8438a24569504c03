use actix_web::web;

use errors::Error;

pub mod answers;
pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::scope("/questions").route("", web::get().to(questions::get_all)))
            .service(web::scope("/answer").route("", web::post().to(answers::create))),
    );
}

/// Malformed bodies (missing fields, a choice other than "A"/"B", invalid
/// JSON) get the same 400 payload as failed validation.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("Rejected request body: {}", err);
        Error::BadRequest("Invalid request".to_string()).into()
    })
}
