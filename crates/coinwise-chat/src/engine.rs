//! Response selection for the budget assistant.
//!
//! Maps (utterance, history) to a reply through a fixed-priority rule chain:
//! greeting, gratitude, self-description, topic rules, short-input
//! continuation, then a random-aphorism fallback. A rule higher in the chain
//! always wins, even when a later rule's trigger is also present.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use tracing::debug;

use crate::context;
use crate::rules::{
    self, GRATITUDE_REPLY, GRATITUDE_TOKENS, GREETING_REPLY, SELF_DESCRIPTION_REPLY,
    SELF_QUERY_PHRASES,
};
use crate::wisdom;

// Greeting must open the utterance; the `\b` keeps "history" from reading
// as "hi".
static GREETING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:hello|hi|hey|greetings|namaste)\b").expect("Invalid greeting regex")
});

/// Rule-based reply selector.
///
/// Total over all string inputs: the fallback always matches, so every call
/// returns a non-empty reply. The engine holds no mutable state and never
/// touches `history` beyond reading it; randomness enters only through the
/// fallback draw.
#[derive(Debug, Default)]
pub struct ResponseEngine;

impl ResponseEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Select a reply, drawing the fallback aphorism from the thread-local
    /// RNG.
    pub fn respond(&self, utterance: &str, history: &[String]) -> String {
        self.respond_with_rng(utterance, history, &mut rand::thread_rng())
    }

    /// Select a reply with an injected RNG so the fallback draw is
    /// deterministic under test.
    pub fn respond_with_rng<R: Rng + ?Sized>(
        &self,
        utterance: &str,
        history: &[String],
        rng: &mut R,
    ) -> String {
        let lower = utterance.to_lowercase();

        if GREETING_RE.is_match(&lower) {
            debug!("greeting rule matched");
            return GREETING_REPLY.to_string();
        }

        if GRATITUDE_TOKENS.iter().any(|t| lower.contains(t)) {
            debug!("gratitude rule matched");
            return GRATITUDE_REPLY.to_string();
        }

        if SELF_QUERY_PHRASES.iter().any(|p| lower.contains(p)) {
            debug!("self-description rule matched");
            return SELF_DESCRIPTION_REPLY.to_string();
        }

        if let Some(rule) = rules::match_topic(&lower) {
            debug!(topic = ?rule.topic, "topic rule matched");
            return rule.reply_for(&lower).to_string();
        }

        if let Some(reply) = context::continuation_reply(&lower, history) {
            debug!("contextual continuation matched");
            return reply.to_string();
        }

        debug!("no rule matched, using fallback");
        wisdom::fallback_reply(rng)
    }
}

// =============================================================================
// Tests
// =============================================================================
