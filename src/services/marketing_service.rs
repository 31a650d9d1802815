use crate::models::{AnalysisResult, Sentiment};

const LINKEDIN_POSITIVE: &str = "LinkedIn is THE battleground for CA visibility in 2025. Period.

Every CA who's crushing it right now? They're on LinkedIn. Every CA struggling to get clients? Silent on social media.

The math is simple:
- Visibility = Credibility
- Credibility = Trust
- Trust = Premium Clients

You're either building your brand or you're invisible. There's no middle ground anymore.

AGGRESSIVE TAKE: If you're not posting weekly, you're actively choosing irrelevance. The market rewards the visible, not the silent.";

const LINKEDIN_NEGATIVE: &str = "Look, I get the resistance to LinkedIn. I really do.

But here's the harsh reality: Your competitors are posting. They're building authority. They're winning YOUR potential clients.

Your silence isn't humility - it's a business mistake.

The ICAI compliance concerns? Manageable with the right approach.
The time investment? 15 minutes a day beats hours of cold calling.
The fear of judgment? Less painful than watching competitors win.

REAL TALK: The CAs who adapt to content marketing will dominate the next decade. Those who don't? They'll wonder where all the clients went.";

const LINKEDIN_NEUTRAL: &str = "LinkedIn for CAs is neither magic nor mandatory - it's strategic.

Here's the nuanced truth:
- It works phenomenally well for some niches (tax, compliance, startups)
- It's less effective for others (local audit practices with referral networks)
- Success requires consistency, not perfection

The question isn't \"Should I be on LinkedIn?\"
The question is \"Does my ideal client spend time there?\"

For most CAs targeting business owners and startups? Absolutely yes.
For CAs serving local retail through family connections? Maybe not critical.

Choose wisely based on YOUR practice, not industry pressure.";

/// Whether a question is about social-media marketing
pub fn is_social_media_question(question: &str) -> bool {
    let lowered = question.to_lowercase();
    lowered.contains("linkedin") || lowered.contains("social media")
}

fn linkedin_response(sentiment: Sentiment) -> String {
    match sentiment {
        Sentiment::Positive => LINKEDIN_POSITIVE,
        Sentiment::Negative => LINKEDIN_NEGATIVE,
        Sentiment::Neutral => LINKEDIN_NEUTRAL,
    }
    .to_string()
}

fn fallback_opinion(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "The opportunity here is massive for those willing to execute.",
        Sentiment::Negative => "This approach has significant issues that most are too polite to mention.",
        Sentiment::Neutral => "This requires strategic thinking, not blind following.",
    }
}

fn general_response(sentiment: Sentiment, opinion: &str) -> String {
    match sentiment {
        Sentiment::Positive => format!(
            "BOLD STATEMENT: This is exactly the kind of thinking that separates thriving CAs from surviving ones.

{opinion}

The market rewards decisive action. While others hesitate, you should be moving.

This isn't theory - it's proven strategy backed by CAs who've built 7-figure practices."
        ),
        Sentiment::Negative => format!(
            "Let's address the elephant in the room:

{opinion}

The CA profession has a politeness problem. We tiptoe around broken systems instead of demanding better.

AGGRESSIVE REALITY CHECK: If something isn't working, stop defending it. Adapt or get left behind.

The market is ruthless. Your reputation matters more than tradition."
        ),
        Sentiment::Neutral => format!(
            "Here's my unfiltered take:

{opinion}

The best CAs I know? They question everything. They test assumptions. They make data-driven decisions.

Cookie-cutter advice doesn't build exceptional practices. Thoughtful execution does.

Your practice, your rules - but make them informed rules."
        ),
    }
}

/// Marketing-voice answer for the CA opinion endpoint.
///
/// Social-media questions get a fixed LinkedIn paragraph. Everything else gets a generic
/// paragraph around a sentiment-keyed stock sentence; topic keywords play no part here.
pub fn generate_ca_marketing_response(question: &str, analysis: &AnalysisResult) -> String {
    if is_social_media_question(question) {
        return linkedin_response(analysis.sentiment);
    }

    general_response(analysis.sentiment, fallback_opinion(analysis.sentiment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Emotion;

    fn analysis(sentiment: Sentiment) -> AnalysisResult {
        AnalysisResult {
            sentiment,
            confidence: 0.4,
            intensity: 0.7,
            emotion: Emotion::Neutral,
            compound: 0.0,
            pattern_polarity: 0.0,
            pattern_subjectivity: 0.0,
            valence_compound: 0.0,
            valence_pos: 0.0,
            valence_neg: 0.0,
            valence_neu: 0.0,
        }
    }

    #[test]
    fn test_social_media_detection() {
        assert!(is_social_media_question("Should I post on LinkedIn?"));
        assert!(is_social_media_question("Is SOCIAL MEDIA worth it"));
        assert!(!is_social_media_question("Is GST good?"));
    }

    #[test]
    fn test_linkedin_branch_ignores_topic() {
        let out = generate_ca_marketing_response("LinkedIn and GST?", &analysis(Sentiment::Negative));
        assert!(out.starts_with("Look, I get the resistance to LinkedIn."));
        assert!(!out.contains("GST implementation"));
    }

    #[test]
    fn test_linkedin_branch_per_sentiment() {
        assert!(generate_ca_marketing_response("linkedin", &analysis(Sentiment::Positive))
            .starts_with("LinkedIn is THE battleground"));
        assert!(generate_ca_marketing_response("linkedin", &analysis(Sentiment::Neutral))
            .starts_with("LinkedIn for CAs is neither magic nor mandatory"));
    }

    #[test]
    fn test_general_branch_uses_stock_sentence() {
        let out = generate_ca_marketing_response("How do I grow my practice?", &analysis(Sentiment::Positive));
        assert!(out.starts_with("BOLD STATEMENT:"));
        assert!(out.contains("\n\nThe opportunity here is massive for those willing to execute.\n\n"));
    }

    #[test]
    fn test_topic_keywords_do_not_change_general_branch() {
        let out = generate_ca_marketing_response("What about bitcoin?", &analysis(Sentiment::Neutral));
        assert!(out.starts_with("Here's my unfiltered take:\n\nThis requires strategic thinking, not blind following."));
        assert!(!out.contains("Cryptocurrency presents both opportunities"));

        let audit = generate_ca_marketing_response("Is the GST audit regime broken?", &analysis(Sentiment::Negative));
        assert!(audit.contains("This approach has significant issues that most are too polite to mention."));
        assert!(!audit.contains("GST implementation was chaotic"));
        assert!(!audit.contains("Audit procedures are often bureaucratic formalities"));
    }
}
