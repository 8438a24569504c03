table! {
    questions (id) {
        id -> Varchar,
        option_a -> Text,
        option_b -> Text,
        count_a -> Int4,
        count_b -> Int4,
        character_name -> Nullable<Text>,
        character_play -> Nullable<Text>,
        character_quote -> Nullable<Text>,
        character_name_a -> Nullable<Text>,
        character_play_a -> Nullable<Text>,
        character_quote_a -> Nullable<Text>,
        character_name_b -> Nullable<Text>,
        character_play_b -> Nullable<Text>,
        character_quote_b -> Nullable<Text>,
    }
}
