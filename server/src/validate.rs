use actix_web::web::Json;
use validator::Validate;

use errors::Error;

/// Runs derive-based validation and collapses any failure into the single
/// client-facing 400 message; the field detail only goes to the debug log.
pub fn validate<T>(params: &Json<T>) -> Result<(), Error>
where
    T: Validate,
{
    params.validate().map_err(|errors| {
        debug!("Validation failed: {:?}", errors);
        Error::BadRequest("Invalid request".to_string())
    })
}
