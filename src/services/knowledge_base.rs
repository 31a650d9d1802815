use crate::models::{Sentiment, Topic};

/// Keyword sets in detection priority order. The first topic with any hit wins.
const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Gst, &["gst", "goods and services tax"]),
    (Topic::IncomeTax, &["income tax", "itr", "tax filing"]),
    (Topic::Cryptocurrency, &["crypto", "cryptocurrency", "bitcoin"]),
    (Topic::Audit, &["audit", "auditor", "auditing"]),
];

/// Detect the main topic of `text` by case-insensitive substring match
pub fn detect_topic(text: &str) -> Topic {
    let lowered = text.to_lowercase();

    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::General)
}

/// Canned opinion for `topic` in the given `sentiment`. `General` has none.
pub fn base_opinion(topic: Topic, sentiment: Sentiment) -> Option<&'static str> {
    let text = match (topic, sentiment) {
        (Topic::Gst, Sentiment::Positive) => "GST is a revolutionary reform that simplified India's complex tax structure. It's a masterstroke that unified the nation economically.",
        (Topic::Gst, Sentiment::Negative) => "GST implementation was chaotic and poorly executed. Small businesses suffered tremendously due to complicated compliance requirements.",
        (Topic::Gst, Sentiment::Neutral) => "GST brought systematic changes to Indian taxation, though implementation challenges remain.",

        (Topic::IncomeTax, Sentiment::Positive) => "Progressive income tax ensures wealth redistribution and funds critical infrastructure. It's the backbone of a fair economy.",
        (Topic::IncomeTax, Sentiment::Negative) => "High income tax rates discourage entrepreneurship and drive talent abroad. The system punishes success.",
        (Topic::IncomeTax, Sentiment::Neutral) => "Income tax serves as government revenue while balancing economic growth considerations.",

        (Topic::Cryptocurrency, Sentiment::Positive) => "Cryptocurrency represents financial freedom and innovation. Blockchain technology will revolutionize finance.",
        (Topic::Cryptocurrency, Sentiment::Negative) => "Crypto is highly volatile, unregulated, and often used for illicit activities. It's a speculative bubble.",
        (Topic::Cryptocurrency, Sentiment::Neutral) => "Cryptocurrency presents both opportunities and risks requiring careful regulatory frameworks.",

        (Topic::Audit, Sentiment::Positive) => "Independent audits are crucial for financial transparency and investor protection. They ensure corporate accountability.",
        (Topic::Audit, Sentiment::Negative) => "Audit procedures are often bureaucratic formalities that don't catch real fraud. The Big 4 oligopoly limits competition.",
        (Topic::Audit, Sentiment::Neutral) => "Auditing provides assurance on financial statements within defined professional standards.",

        (Topic::General, _) => return None,
    };
    Some(text)
}
