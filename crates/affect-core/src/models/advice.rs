use serde::{Deserialize, Serialize};

use super::{CanonicalLabel, EmotionDistribution};

/// Communication guidance for a conversation's emotional tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub strategy_title: String,
    pub strategy_content: String,
    pub suggested_tone: String,
    pub reply_tip: String,
}

/// Aggregate emotion picture of a classified conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Labelled results used for the distribution (`unknown` excluded).
    pub labelled_count: usize,
    pub dominant_emotion: CanonicalLabel,
    pub last_message_emotion: CanonicalLabel,
    pub distribution: EmotionDistribution,
}
