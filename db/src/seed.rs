use std::fs::File;
use std::io::BufReader;

use diesel::pg::PgConnection;
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{CharacterInfo, NewQuestion, Question};

pub const DEFAULT_SEED_PATH: &str = "seeds/questions.json";

/// One entry of the seed file. Attribution is optional per side.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDefinition {
    pub id: String,
    pub option_a: String,
    pub option_b: String,
    #[serde(default)]
    pub character_a: Option<CharacterInfo>,
    #[serde(default)]
    pub character_b: Option<CharacterInfo>,
}

impl SeedDefinition {
    fn to_row(&self) -> NewQuestion {
        let (character_name_a, character_play_a, character_quote_a) =
            split_character(&self.character_a);
        let (character_name_b, character_play_b, character_quote_b) =
            split_character(&self.character_b);

        NewQuestion {
            id: self.id.clone(),
            option_a: self.option_a.clone(),
            option_b: self.option_b.clone(),
            count_a: 0,
            count_b: 0,
            character_name_a,
            character_play_a,
            character_quote_a,
            character_name_b,
            character_play_b,
            character_quote_b,
        }
    }
}

fn split_character(
    character: &Option<CharacterInfo>,
) -> (Option<String>, Option<String>, Option<String>) {
    match character {
        Some(info) => (
            Some(info.name.clone()),
            Some(info.play.clone()),
            Some(info.quote.clone()),
        ),
        None => (None, None, None),
    }
}

pub fn load_definitions(path: &str) -> Result<Vec<SeedDefinition>, Error> {
    let file = File::open(path)?;
    let definitions = serde_json::from_reader(BufReader::new(file))?;

    Ok(definitions)
}

/// Upserts every definition in order. Inserts start with zero counters;
/// existing rows only get their display columns refreshed, so this is safe
/// to run on every boot and alongside live vote traffic. The first failing
/// upsert aborts the pass.
pub fn run(conn: &PgConnection, definitions: &[SeedDefinition]) -> Result<usize, Error> {
    for definition in definitions {
        Question::upsert(conn, &definition.to_row())?;
    }

    Ok(definitions.len())
}

pub fn run_from_file(conn: &PgConnection, path: &str) -> Result<usize, Error> {
    let definitions = load_definitions(path)?;

    run(conn, &definitions)
}

#[cfg(test)]
mod tests {
    use diesel::{QueryDsl, RunQueryDsl};

    use crate::models::{Choice, Question};
    use crate::schema::questions;
    use crate::{get_conn, new_pool};

    use super::{run, SeedDefinition};

    fn definition(id: &str, option_a: &str, option_b: &str) -> SeedDefinition {
        SeedDefinition {
            id: id.to_string(),
            option_a: option_a.to_string(),
            option_b: option_b.to_string(),
            character_a: None,
            character_b: None,
        }
    }

    #[test]
    fn seeding_twice_changes_nothing() {
        let pool = new_pool();
        let conn = get_conn(&pool).unwrap();

        let definitions = vec![
            definition("seed-twice-1", "Comedy", "Tragedy"),
            definition("seed-twice-2", "Prose", "Verse"),
        ];

        assert_eq!(run(&conn, &definitions).unwrap(), 2);
        let first_pass: Vec<Question> = vec![
            Question::find_by_id(&conn, "seed-twice-1").unwrap().unwrap(),
            Question::find_by_id(&conn, "seed-twice-2").unwrap().unwrap(),
        ];

        assert_eq!(run(&conn, &definitions).unwrap(), 2);
        let second_pass: Vec<Question> = vec![
            Question::find_by_id(&conn, "seed-twice-1").unwrap().unwrap(),
            Question::find_by_id(&conn, "seed-twice-2").unwrap().unwrap(),
        ];

        assert_eq!(first_pass, second_pass);

        diesel::delete(questions::table.find("seed-twice-1"))
            .execute(&conn)
            .unwrap();
        diesel::delete(questions::table.find("seed-twice-2"))
            .execute(&conn)
            .unwrap();
    }

    #[test]
    fn reseeding_keeps_counters_and_refreshes_text() {
        let pool = new_pool();
        let conn = get_conn(&pool).unwrap();

        run(&conn, &[definition("seed-keep", "Old A", "Old B")]).unwrap();

        Question::record_vote(&conn, "seed-keep", Choice::A).unwrap();
        Question::record_vote(&conn, "seed-keep", Choice::A).unwrap();
        Question::record_vote(&conn, "seed-keep", Choice::B).unwrap();

        run(&conn, &[definition("seed-keep", "New A", "New B")]).unwrap();

        let question = Question::find_by_id(&conn, "seed-keep").unwrap().unwrap();
        assert_eq!(question.option_a, "New A");
        assert_eq!(question.option_b, "New B");
        assert_eq!(question.count_a, 2);
        assert_eq!(question.count_b, 1);

        diesel::delete(questions::table.find("seed-keep"))
            .execute(&conn)
            .unwrap();
    }

    #[test]
    fn record_vote_on_missing_id_is_none() {
        let pool = new_pool();
        let conn = get_conn(&pool).unwrap();

        let result = Question::record_vote(&conn, "never-seeded", Choice::B).unwrap();
        assert_eq!(result, None);
    }
}
