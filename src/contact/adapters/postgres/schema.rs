//! Diesel schema for contact submissions.

diesel::table! {
    /// Append-only log of contact form submissions.
    contact_submissions (id) {
        /// Store-assigned identifier.
        id -> Int4,
        /// Sender name.
        #[max_length = 100]
        name -> Varchar,
        /// Sender email address.
        #[max_length = 100]
        email -> Varchar,
        /// Message body.
        message -> Text,
        /// Insertion timestamp, defaulted by the store.
        created_at -> Timestamptz,
    }
}
