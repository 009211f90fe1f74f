/// Time utilities shared by the digest and any display layer.
pub mod time {
    use chrono::{DateTime, Utc};

    /// Human-relative age of a publish time.
    ///
    /// Under two whole minutes reads "just now"; under an hour counts
    /// minutes; anything longer rounds to hours, with the singular
    /// "an hour ago" for exactly one. Future timestamps clamp to "just now".
    pub fn relative_age(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let minutes = now.signed_duration_since(published).num_minutes().max(0);

        if minutes < 2 {
            return "just now".to_string();
        }
        if minutes < 60 {
            return format!("{} minutes ago", minutes);
        }

        let hours = (minutes as f64 / 60.0).round() as i64;
        if hours == 1 {
            "an hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    }
}
