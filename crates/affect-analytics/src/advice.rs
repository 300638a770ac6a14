//! Conversation summaries and communication advice.
//!
//! Guidance is generic and advisory; nothing here is clinical.

use affect_core::constants::LAST_MESSAGE_WINDOW;
use affect_core::models::{Advice, CanonicalLabel, ConversationSummary};

use crate::distribution::{build_distribution, count_labels, most_common};

struct Strategy {
    label: CanonicalLabel,
    title: &'static str,
    content: &'static str,
    tone: &'static str,
}

static STRATEGIES: [Strategy; 7] = [
    Strategy {
        label: CanonicalLabel::Anger,
        title: "De-escalation Strategy",
        content: "The conversation seems heated. It's best to take a break and let emotions cool down. Avoid accusatory language ('You always...') and use 'I' statements ('I feel hurt when...'). Validate their feelings even if you disagree with their actions.",
        tone: "Calm, Patient, Validating",
    },
    Strategy {
        label: CanonicalLabel::Sadness,
        title: "Supportive Approach",
        content: "There is a lot of sadness detected. Focus on showing empathy and understanding. Simple phrases like 'I'm here for you' or 'I understand this is hard' go a long way. Avoid trying to 'fix' the problem immediately; just listening is often enough.",
        tone: "Empathetic, Gentle, Reassuring",
    },
    Strategy {
        label: CanonicalLabel::Fear,
        title: "Reassurance Strategy",
        content: "Anxiety or fear is present. Try to provide a sense of stability and safety. Ask open-ended questions to understand the root of the fear. Be consistent and reliable in your responses.",
        tone: "Reassuring, Steady, Protective",
    },
    Strategy {
        label: CanonicalLabel::Happy,
        title: "Shared Joy",
        content: "The vibe is positive! Keep the momentum going by sharing in their happiness. Ask follow-up questions to show you're interested in what makes them happy.",
        tone: "Enthusiastic, Warm, Engaging",
    },
    Strategy {
        label: CanonicalLabel::Love,
        title: "Deepening Connection",
        content: "There's a lot of affection here. Reciprocate the feelings and express your appreciation. It's a good time to strengthen your bond.",
        tone: "Affectionate, Appreciative, Open",
    },
    Strategy {
        label: CanonicalLabel::Surprise,
        title: "Curiosity Approach",
        content: "Something unexpected came up. Express curiosity and ask for more details. Avoid jumping to conclusions.",
        tone: "Curious, Open-minded, Interested",
    },
    Strategy {
        label: CanonicalLabel::Neutral,
        title: "Engagement Boost",
        content: "The conversation is calm but might lack depth. Try introducing a new topic or asking a question about their day to spark more engagement.",
        tone: "Casual, Friendly, Interested",
    },
];

static REPLY_TIPS: [(CanonicalLabel, &str); 6] = [
    (
        CanonicalLabel::Anger,
        "The last message was angry. Do not reply in anger. Wait 10 minutes before responding.",
    ),
    (
        CanonicalLabel::Sadness,
        "They ended on a sad note. A gentle check-in or a comforting message would be appropriate.",
    ),
    (
        CanonicalLabel::Fear,
        "They seem anxious in their last text. Reassure them.",
    ),
    (
        CanonicalLabel::Happy,
        "They ended happily. A thumbs up or a happy sticker is a great way to acknowledge.",
    ),
    (
        CanonicalLabel::Love,
        "A sweet closing. Send a heart or a 'love you' back.",
    ),
    (
        CanonicalLabel::Neutral,
        "A neutral ending. You can reply at your convenience.",
    ),
];

const FALLBACK_REPLY_TIP: &str = "Tailor your reply to their current mood.";

/// Summarize a classified conversation in message order.
///
/// `unknown` results are left out of the distribution and dominant emotion
/// but still count toward the last-message emotion. Returns `None` when
/// nothing labelled remains.
pub fn summarize_conversation(labels: &[CanonicalLabel]) -> Option<ConversationSummary> {
    let labelled: Vec<CanonicalLabel> = labels
        .iter()
        .filter(|l| **l != CanonicalLabel::Unknown)
        .cloned()
        .collect();
    let dominant_emotion = most_common(&count_labels(&labelled))?;

    // The tail keeps `unknown` results; an unknown-heavy ending gets the
    // generic reply tip.
    let tail_start = labels.len().saturating_sub(LAST_MESSAGE_WINDOW);
    let last_message_emotion =
        most_common(&count_labels(&labels[tail_start..])).unwrap_or(CanonicalLabel::Neutral);

    Some(ConversationSummary {
        labelled_count: labelled.len(),
        dominant_emotion,
        last_message_emotion,
        distribution: build_distribution(&labelled),
    })
}

/// Strategy for the dominant emotion plus a tip for the last message.
/// Unrecognised dominant emotions get the neutral strategy.
pub fn generate_advice(dominant: &CanonicalLabel, last_message: &CanonicalLabel) -> Advice {
    let strategy = STRATEGIES
        .iter()
        .find(|s| s.label == *dominant)
        .unwrap_or(&STRATEGIES[STRATEGIES.len() - 1]);
    let reply_tip = REPLY_TIPS
        .iter()
        .find(|(label, _)| label == last_message)
        .map_or(FALLBACK_REPLY_TIP, |(_, tip)| *tip);

    Advice {
        strategy_title: strategy.title.to_string(),
        strategy_content: strategy.content.to_string(),
        suggested_tone: strategy.tone.to_string(),
        reply_tip: reply_tip.to_string(),
    }
}

/// Advice for a whole conversation; `None` when nothing was labelled.
pub fn advise(labels: &[CanonicalLabel]) -> Option<(ConversationSummary, Advice)> {
    let summary = summarize_conversation(labels)?;
    let advice = generate_advice(&summary.dominant_emotion, &summary.last_message_emotion);
    Some((summary, advice))
}
