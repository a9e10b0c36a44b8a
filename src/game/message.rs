/// How much of the sender's message the receiver gets for a given distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageOutcome {
    /// `distance < threshold`
    Full,
    /// `threshold <= distance <= 2 * threshold`
    Half,
    /// `distance > 2 * threshold`
    Empty,
}

impl MessageOutcome {
    pub fn classify(distance: u64, threshold: u64) -> Self {
        if distance < threshold {
            MessageOutcome::Full
        } else if distance <= threshold.saturating_mul(2) {
            MessageOutcome::Half
        } else {
            MessageOutcome::Empty
        }
    }

    /// Truncates `message` accordingly. Half keeps the first `len / 2` characters,
    /// rounding down.
    pub fn apply(self, message: &str) -> String {
        match self {
            MessageOutcome::Full => message.to_owned(),
            MessageOutcome::Half => {
                let half = message.chars().count() / 2;
                message.chars().take(half).collect()
            }
            MessageOutcome::Empty => String::new(),
        }
    }
}

/// The message player 2 should receive.
///
/// # Examples
///
/// ```
/// use weighted_edit_distance::game::receiver_message;
///
/// assert_eq!(receiver_message(5, 10, "secret"), "secret");
/// assert_eq!(receiver_message(15, 10, "secret"), "sec");
/// assert_eq!(receiver_message(25, 10, "secret"), "");
/// ```
pub fn receiver_message(distance: u64, threshold: u64, sender_message: &str) -> String {
    MessageOutcome::classify(distance, threshold).apply(sender_message)
}
