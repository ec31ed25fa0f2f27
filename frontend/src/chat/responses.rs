pub const FALLBACK_REPLY: &str =
    "I'm not sure how to help with that. Would you like to speak with one of our representatives?";

pub struct ResponseRule {
    matches: Box<dyn Fn(&str) -> bool>,
    reply: String,
}

impl ResponseRule {
    pub fn new(matches: impl Fn(&str) -> bool + 'static, reply: &str) -> Self {
        Self {
            matches: Box::new(matches),
            reply: reply.to_string(),
        }
    }

    /// Matches when the lower-cased message contains `keyword`.
    pub fn keyword(keyword: &str, reply: &str) -> Self {
        let keyword = keyword.to_lowercase();
        Self::new(move |message| message.contains(keyword.as_str()), reply)
    }
}

/// Canned replies checked in declaration order; the first hit wins.
pub struct ResponseTable {
    rules: Vec<ResponseRule>,
    fallback: String,
}

impl ResponseTable {
    pub fn new(fallback: &str) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.to_string(),
        }
    }

    pub fn rule(mut self, rule: ResponseRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn resolve(&self, message: &str) -> &str {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| (rule.matches)(&message))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(&self.fallback)
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        ResponseTable::new(FALLBACK_REPLY)
            .rule(ResponseRule::keyword("hello", "Hi! How can I help you today?"))
            .rule(ResponseRule::keyword("hi", "Hello! How may I assist you?"))
            .rule(ResponseRule::keyword(
                "contact",
                "You can reach us at info@empirebuilders.com or call us at +1 (555) 123-4567.",
            ))
            .rule(ResponseRule::keyword(
                "location",
                "We are located at 123 Eco Street, Green City, 12345.",
            ))
            .rule(ResponseRule::keyword(
                "hours",
                "Our business hours are Monday-Friday 9AM-6PM, Saturday 10AM-2PM, and we are closed on Sundays.",
            ))
            .rule(ResponseRule::keyword(
                "services",
                "We offer sustainable architectural design, consultation, and project management services.",
            ))
            .rule(ResponseRule::keyword(
                "quote",
                "Please fill out our contact form with your project details, and we'll get back to you with a quote.",
            ))
            .rule(ResponseRule::keyword(
                "bye",
                "Thank you for chatting with us! Have a great day!",
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORDS: [&str; 8] = ["hello", "hi", "contact", "location", "hours", "services", "quote", "bye"];

    #[test]
    fn first_declared_match_wins() {
        let table = ResponseTable::default();
        assert_eq!(
            table.resolve("I'd like to say hello and also hi"),
            "Hi! How can I help you today?"
        );
    }

    #[test]
    fn unmatched_input_gets_fallback() {
        assert_eq!(ResponseTable::default().resolve("xyz"), FALLBACK_REPLY);
    }

    #[test]
    fn matching_ignores_case() {
        let table = ResponseTable::default();
        assert_eq!(
            table.resolve("What are your HOURS?"),
            table.resolve("hours")
        );
    }

    #[test]
    fn every_keyword_resolves_to_earliest_contained_rule() {
        let table = ResponseTable::default();
        for (i, keyword) in KEYWORDS.iter().enumerate() {
            let message = format!("tell me about {}", keyword.to_uppercase());
            let lowered = message.to_lowercase();
            let first = KEYWORDS
                .iter()
                .take(i + 1)
                .find(|k| lowered.contains(*k))
                .unwrap();
            assert_eq!(table.resolve(&message), table.resolve(first), "keyword {}", keyword);
        }
    }

    #[test]
    fn substring_inside_other_words_still_matches() {
        // "this" contains "hi"
        assert_eq!(ResponseTable::default().resolve("this"), "Hello! How may I assist you?");
    }

    #[test]
    fn custom_predicates_keep_order() {
        let table = ResponseTable::new("none")
            .rule(ResponseRule::new(|m| m.ends_with('?'), "question"))
            .rule(ResponseRule::keyword("Price", "pricing"));
        assert_eq!(table.resolve("what is the price?"), "question");
        assert_eq!(table.resolve("PRICE list"), "pricing");
        assert_eq!(table.resolve("nothing"), "none");
    }
}
