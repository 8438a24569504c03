use diesel::pg::PgConnection;
use diesel::result::Error as DBError;
use diesel::{self, ExpressionMethods, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

/// Which of the two options a vote is for. Serialized on the wire as
/// `"A"` / `"B"`; anything else is rejected during deserialization.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Choice {
    A,
    B,
}

/// Display attribution for one option: the character it represents.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CharacterInfo {
    pub name: String,
    pub play: String,
    pub quote: String,
}

#[derive(Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: String,
    pub option_a: String,
    pub option_b: String,
    pub count_a: i32,
    pub count_b: i32,
    // Undifferentiated attribution from the first schema revision. Kept in
    // the table so old rows still load, but never sent to clients; the
    // per-option columns below replaced it.
    pub character_name: Option<String>,
    pub character_play: Option<String>,
    pub character_quote: Option<String>,
    pub character_name_a: Option<String>,
    pub character_play_a: Option<String>,
    pub character_quote_a: Option<String>,
    pub character_name_b: Option<String>,
    pub character_play_b: Option<String>,
    pub character_quote_b: Option<String>,
}

/// The shape returned by the question list: counters and attribution are
/// stripped so a client cannot see the standings before voting.
#[derive(Debug, Deserialize, PartialEq, Queryable, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub id: String,
    pub option_a: String,
    pub option_b: String,
}

#[derive(Debug, Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub id: String,
    pub option_a: String,
    pub option_b: String,
    pub count_a: i32,
    pub count_b: i32,
    pub character_name_a: Option<String>,
    pub character_play_a: Option<String>,
    pub character_quote_a: Option<String>,
    pub character_name_b: Option<String>,
    pub character_play_b: Option<String>,
    pub character_quote_b: Option<String>,
}

impl QuestionSummary {
    pub fn get_all(conn: &PgConnection) -> Result<Vec<QuestionSummary>, Error> {
        let summaries = questions::table
            .select((questions::id, questions::option_a, questions::option_b))
            .load::<QuestionSummary>(conn)?;

        Ok(summaries)
    }
}

impl Question {
    pub fn find_by_id(conn: &PgConnection, question_id: &str) -> Result<Option<Question>, Error> {
        match questions::table.find(question_id).first(conn) {
            Ok(question) => Ok(Some(question)),
            Err(DBError::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Adds one vote to the counter picked by `choice` and returns the row
    /// as it stands after the increment, or `None` if no such question
    /// exists.
    ///
    /// The increment runs as a single `UPDATE ... SET count = count + 1
    /// RETURNING *` statement so concurrent votes on the same row serialize
    /// inside Postgres; the application never reads a counter and writes it
    /// back.
    pub fn record_vote(
        conn: &PgConnection,
        question_id: &str,
        choice: Choice,
    ) -> Result<Option<Question>, Error> {
        let result = match choice {
            Choice::A => diesel::update(questions::table.find(question_id))
                .set(questions::count_a.eq(questions::count_a + 1))
                .get_result::<Question>(conn),
            Choice::B => diesel::update(questions::table.find(question_id))
                .set(questions::count_b.eq(questions::count_b + 1))
                .get_result::<Question>(conn),
        };

        match result {
            Ok(question) => Ok(Some(question)),
            Err(DBError::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Inserts the question with zero counters, or refreshes its display
    /// columns if the id already exists. Counters are never part of the
    /// update set, so re-seeding leaves live tallies alone.
    pub fn upsert(conn: &PgConnection, row: &NewQuestion) -> Result<(), Error> {
        use diesel::pg::upsert::excluded;

        diesel::insert_into(questions::table)
            .values(row)
            .on_conflict(questions::id)
            .do_update()
            .set((
                questions::option_a.eq(excluded(questions::option_a)),
                questions::option_b.eq(excluded(questions::option_b)),
                questions::character_name_a.eq(excluded(questions::character_name_a)),
                questions::character_play_a.eq(excluded(questions::character_play_a)),
                questions::character_quote_a.eq(excluded(questions::character_quote_a)),
                questions::character_name_b.eq(excluded(questions::character_name_b)),
                questions::character_play_b.eq(excluded(questions::character_play_b)),
                questions::character_quote_b.eq(excluded(questions::character_quote_b)),
            ))
            .execute(conn)?;

        Ok(())
    }

    /// Attribution for the chosen option, if the seed data carried one.
    /// Partial attribution (a name without its quote) is treated as absent
    /// rather than padded out.
    pub fn character_for(&self, choice: Choice) -> Option<CharacterInfo> {
        let (name, play, quote) = match choice {
            Choice::A => (
                &self.character_name_a,
                &self.character_play_a,
                &self.character_quote_a,
            ),
            Choice::B => (
                &self.character_name_b,
                &self.character_play_b,
                &self.character_quote_b,
            ),
        };

        match (name, play, quote) {
            (Some(name), Some(play), Some(quote)) => Some(CharacterInfo {
                name: name.clone(),
                play: play.clone(),
                quote: quote.clone(),
            }),
            _ => None,
        }
    }
}
