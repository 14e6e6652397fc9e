//! Diesel schema for review persistence.

diesel::table! {
    /// Registered review teams.
    teams (name) {
        /// Unique team name.
        #[max_length = 64]
        name -> Varchar,
    }
}

diesel::table! {
    /// Directory users and their team membership.
    users (id) {
        /// External user identifier.
        #[max_length = 64]
        id -> Varchar,
        /// Display name.
        #[max_length = 128]
        username -> Varchar,
        /// Owning team name.
        #[max_length = 64]
        team_name -> Varchar,
        /// Whether the user accepts review assignments.
        active -> Bool,
    }
}

diesel::table! {
    /// Tracked pull requests.
    pull_requests (id) {
        /// External pull request identifier.
        #[max_length = 64]
        id -> Varchar,
        /// Pull request title.
        #[max_length = 255]
        title -> Varchar,
        /// Author user identifier.
        #[max_length = 64]
        author_id -> Varchar,
        /// Lifecycle status label.
        #[max_length = 16]
        status -> Varchar,
        /// Timestamp of the first merge.
        merged_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Reviewer assignments, one row per pull request and reviewer.
    pr_reviewers (pull_request_id, reviewer_id) {
        /// Reviewed pull request identifier.
        #[max_length = 64]
        pull_request_id -> Varchar,
        /// Assigned reviewer identifier.
        #[max_length = 64]
        reviewer_id -> Varchar,
    }
}

diesel::joinable!(pr_reviewers -> pull_requests (pull_request_id));

diesel::allow_tables_to_appear_in_same_query!(pr_reviewers, pull_requests);
