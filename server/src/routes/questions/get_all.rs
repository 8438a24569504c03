use actix_web::{
    web::{block, Data, Json},
    Result,
};

use db::{get_conn, models::QuestionSummary, PgPool};
use errors::Error;

pub async fn get_all(pool: Data<PgPool>) -> Result<Json<Vec<QuestionSummary>>, Error> {
    let connection = get_conn(&pool)?;

    let questions = block(move || QuestionSummary::get_all(&connection)).await??;

    Ok(Json(questions))
}
