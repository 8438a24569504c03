use actix_web::{
    web::{block, Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{
    get_conn,
    models::{CharacterInfo, Choice, Question},
    PgPool,
};
use errors::Error;

use crate::validate::validate;

#[derive(Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    #[validate(length(min = "1"))]
    pub question_id: String,
    pub choice: Choice,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub count_a: i32,
    pub count_b: i32,
    pub percent_a: i32,
    pub percent_b: i32,
    pub total: i32,
    pub character: Option<CharacterInfo>,
}

/// Integer percentage of `count` against `total`, rounded half away from
/// zero. A zero total reports 50/50; post-increment the total is always at
/// least 1, so this only covers a row observed mid-transition.
fn percent(count: i32, total: i32) -> i32 {
    if total == 0 {
        return 50;
    }

    (f64::from(count) / f64::from(total) * 100.0).round() as i32
}

impl AnswerResponse {
    fn from_question(question: &Question, choice: Choice) -> AnswerResponse {
        let total = question.count_a + question.count_b;

        AnswerResponse {
            count_a: question.count_a,
            count_b: question.count_b,
            percent_a: percent(question.count_a, total),
            percent_b: percent(question.count_b, total),
            total,
            character: question.character_for(choice),
        }
    }
}

pub async fn create(
    pool: Data<PgPool>,
    params: Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, Error> {
    validate(&params)?;

    let connection = get_conn(&pool)?;
    let params = params.into_inner();
    let choice = params.choice;

    let updated =
        block(move || Question::record_vote(&connection, &params.question_id, choice)).await??;

    let question = updated.ok_or_else(|| Error::NotFound("Question not found".to_string()))?;

    Ok(Json(AnswerResponse::from_question(&question, choice)))
}
