//! Diesel table definitions for the league schema.
//!
//! Must match `backend/migrations` exactly.

diesel::table! {
    /// Clubs. `short_name` is the unique, upper-cased club code.
    teams (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
        #[max_length = 10]
        short_name -> Varchar,
        #[max_length = 100]
        city -> Varchar,
        #[max_length = 50]
        league -> Varchar,
    }
}

diesel::table! {
    players (id) {
        id -> Int4,
        #[max_length = 100]
        first_name -> Varchar,
        #[max_length = 100]
        last_name -> Varchar,
        #[max_length = 30]
        position -> Varchar,
        #[max_length = 50]
        nationality -> Varchar,
        birth_date -> Nullable<Date>,
        number -> Nullable<Int4>,
        team_id -> Int4,
    }
}

diesel::table! {
    /// Fixtures. Scores are set once the match is played.
    matches (id) {
        id -> Int4,
        #[max_length = 10]
        season -> Varchar,
        matchday -> Int4,
        match_date -> Nullable<Date>,
        home_team_id -> Int4,
        away_team_id -> Int4,
        home_score -> Nullable<Int4>,
        away_score -> Nullable<Int4>,
        played -> Bool,
    }
}

diesel::table! {
    goals (id) {
        id -> Int4,
        match_id -> Int4,
        scorer_id -> Int4,
        minute -> Nullable<Int4>,
        own_goal -> Bool,
        penalty -> Bool,
    }
}

diesel::table! {
    assists (id) {
        id -> Int4,
        match_id -> Int4,
        player_id -> Int4,
        minute -> Nullable<Int4>,
    }
}

diesel::table! {
    cards (id) {
        id -> Int4,
        match_id -> Int4,
        player_id -> Int4,
        /// `yellow` or `red`.
        #[max_length = 10]
        card_type -> Varchar,
        minute -> Nullable<Int4>,
    }
}

diesel::joinable!(players -> teams (team_id));
diesel::joinable!(goals -> matches (match_id));
diesel::joinable!(assists -> matches (match_id));
diesel::joinable!(cards -> matches (match_id));

diesel::allow_tables_to_appear_in_same_query!(teams, players, matches, goals, assists, cards);
