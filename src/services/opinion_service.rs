use rand::seq::IndexedRandom;
use rand::Rng;

use crate::models::{AnalysisResult, BiasLevel, Emotion, Sentiment, Topic, WritingVoice};
use crate::services::knowledge_base;

const AGGRESSIVE_NOTE: &str = "\n\nNote: This is an opinionated analysis based on current market dynamics and professional insights. Your mileage may vary.";
const EMOTIONAL_DISCLAIMER: &str = "\n\nDisclaimer: This perspective comes from deep industry experience and genuine conviction about what works in the CA profession.";
const BALANCED_PREFIX: &str = "Here's my professional take:\n\n";
const BALANCED_PERSPECTIVE: &str = "\n\nPerspective: Based on 15+ years in the CA profession and market analysis.";
const NEUTRAL_PREFIX: &str = "Professional Analysis:\n\n";
const NEUTRAL_NOTE: &str = "\n\nNote: This analysis is based on current regulatory frameworks and market conditions.";

/// Render the opinion for `question` in the requested voice.
///
/// The topic is detected from the question text.
pub fn generate_opinionated_response(
    question: &str,
    analysis: &AnalysisResult,
    voice: WritingVoice,
    bias: BiasLevel,
) -> String {
    render_opinion(knowledge_base::detect_topic(question), analysis, voice, bias)
}

/// Render the opinion for an already resolved `topic`
pub fn render_opinion(
    topic: Topic,
    analysis: &AnalysisResult,
    voice: WritingVoice,
    bias: BiasLevel,
) -> String {
    let base = knowledge_base::base_opinion(topic, analysis.sentiment).unwrap_or("");

    match voice {
        WritingVoice::Aggressive => aggressive_response(analysis.sentiment, base, bias),
        WritingVoice::Emotional => emotional_response(analysis.sentiment, analysis.emotion, base, bias),
        WritingVoice::Balanced => balanced_response(analysis.sentiment, base),
        WritingVoice::Neutral => neutral_response(base),
    }
}

fn aggressive_prefix(bias: BiasLevel, sentiment: Sentiment) -> &'static str {
    match (bias, sentiment) {
        (BiasLevel::Strong, Sentiment::Positive) => "Let me be crystal clear - ",
        (BiasLevel::Strong, Sentiment::Negative) => "Here's the brutal truth - ",
        (BiasLevel::Strong, Sentiment::Neutral) => "Let's cut through the noise - ",
        (BiasLevel::Moderate, Sentiment::Positive) => "The facts are undeniable - ",
        (BiasLevel::Moderate, Sentiment::Negative) => "The reality is harsh - ",
        (BiasLevel::Moderate, Sentiment::Neutral) => "Here's what you need to know - ",
        (BiasLevel::Mild, Sentiment::Positive) => "Based on evidence - ",
        (BiasLevel::Mild, Sentiment::Negative) => "The data shows - ",
        (BiasLevel::Mild, Sentiment::Neutral) => "Looking objectively - ",
    }
}

fn aggressive_closer(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "\n\nBottom line: This is transformative, period.",
        Sentiment::Negative => "\n\nBottom line: This is fundamentally flawed, no question about it.",
        Sentiment::Neutral => "\n\nBottom line: The evidence speaks for itself.",
    }
}

fn aggressive_response(sentiment: Sentiment, base: &str, bias: BiasLevel) -> String {
    let mut response = format!("{}{}", aggressive_prefix(bias, sentiment), base);

    if bias == BiasLevel::Strong {
        response.push_str(aggressive_closer(sentiment));
    }

    response.push_str(AGGRESSIVE_NOTE);
    response
}

fn emotion_opener(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Joy => "I'm genuinely excited to share this - ",
        Emotion::Anger => "It's frustrating to see this - ",
        Emotion::Sadness => "It's disappointing that - ",
        Emotion::Fear => "The concerning reality is - ",
        Emotion::Surprise => "What's remarkable is - ",
        Emotion::Positive => "What's inspiring here is - ",
        Emotion::Negative => "What's deeply troubling is - ",
        Emotion::Neutral => "What's interesting to note is - ",
    }
}

fn emotional_phrases(sentiment: Sentiment) -> [&'static str; 3] {
    match sentiment {
        Sentiment::Positive => [
            "This genuinely moves the needle",
            "I'm passionate about this",
            "This is where real change happens",
        ],
        Sentiment::Negative => [
            "This keeps me up at night",
            "I feel strongly that this needs attention",
            "The frustration is real here",
        ],
        Sentiment::Neutral => [
            "This deserves thoughtful consideration",
            "There's nuance worth exploring",
            "The complexity here is fascinating",
        ],
    }
}

fn emotional_response(sentiment: Sentiment, emotion: Emotion, base: &str, bias: BiasLevel) -> String {
    let mut response = format!("{}{}", emotion_opener(emotion), base);

    if matches!(bias, BiasLevel::Moderate | BiasLevel::Strong) {
        response.push_str("\n\n");
        response.push_str(emotional_phrases(sentiment)[0]);
        response.push('.');
    }

    response.push_str(EMOTIONAL_DISCLAIMER);
    response
}

fn balanced_response(sentiment: Sentiment, base: &str) -> String {
    let mut response = format!("{}{}", BALANCED_PREFIX, base);

    match sentiment {
        Sentiment::Positive => response
            .push_str("\n\nThat said, there are challenges to consider in implementation and adoption."),
        Sentiment::Negative => response
            .push_str("\n\nHowever, there are potential improvements that could address these concerns."),
        Sentiment::Neutral => {}
    }

    response.push_str(BALANCED_PERSPECTIVE);
    response
}

fn neutral_response(base: &str) -> String {
    format!("{}{}{}", NEUTRAL_PREFIX, base, NEUTRAL_NOTE)
}

/// Candidate sentences appended by [`enhance_response`]. Empty for voices that pass through.
pub fn enhancement_candidates(voice: WritingVoice, sentiment: Sentiment) -> &'static [&'static str] {
    match (voice, sentiment) {
        (WritingVoice::Aggressive, Sentiment::Positive) => &[
            "\n\nLet me double down on this: the potential here is massive.",
            "\n\nDon't let anyone tell you otherwise - the opportunity is real.",
            "\n\nThis is where smart CAs are focusing their energy, period.",
        ],
        (WritingVoice::Aggressive, Sentiment::Negative) => &[
            "\n\nI'll say it louder for those in the back: this approach is broken.",
            "\n\nStop sugarcoating it - the system needs a complete overhaul.",
            "\n\nAny CA still doing this is leaving money on the table. Wake up.",
        ],
        (WritingVoice::Aggressive, Sentiment::Neutral) => &[
            "\n\nHere's the unfiltered truth: it depends on execution.",
            "\n\nThe market doesn't care about excuses - results matter.",
            "\n\nSuccessful CAs know when to adapt. The choice is yours.",
        ],
        (WritingVoice::Emotional, Sentiment::Positive) => &[
            "\n\nThis is what gets me excited about the future of our profession.",
            "\n\nI've seen this transform practices, and it's beautiful.",
            "\n\nThe pride I feel when CAs embrace this is indescribable.",
        ],
        (WritingVoice::Emotional, Sentiment::Negative) => &[
            "\n\nIt genuinely pains me to see talented CAs struggle with this.",
            "\n\nThe frustration in the community is palpable, and I feel it too.",
            "\n\nWe deserve better, and it's time to demand it.",
        ],
        (WritingVoice::Emotional, Sentiment::Neutral) => &[
            "\n\nMy experience tells me there's wisdom in measured approaches.",
            "\n\nI respect both perspectives here - nuance matters.",
            "\n\nThis reflects the complexity of our evolving profession.",
        ],
        (WritingVoice::Balanced | WritingVoice::Neutral, _) => &[],
    }
}

/// Append one randomly chosen flourish for aggressive and emotional voices
pub fn enhance_response<R: Rng + ?Sized>(
    response: String,
    voice: WritingVoice,
    sentiment: Sentiment,
    rng: &mut R,
) -> String {
    match enhancement_candidates(voice, sentiment).choose(rng) {
        Some(addition) => response + *addition,
        None => response,
    }
}
