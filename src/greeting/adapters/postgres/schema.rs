//! Diesel schema for the greeting table.

diesel::table! {
    /// Landing-page greetings.
    messages (id) {
        /// Store-assigned identifier.
        id -> Int4,
        /// Greeting text.
        #[max_length = 255]
        text -> Varchar,
        /// Insertion timestamp, defaulted by the store.
        created_at -> Timestamptz,
    }
}
