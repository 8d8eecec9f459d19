//! Short-input contextual continuation.
//!
//! When a terse reply ("ok", "sure") follows an earlier topic, the prior
//! utterances decide which thread to continue instead of dropping straight
//! to the generic fallback. The gate is deliberately narrow: the trimmed
//! utterance must be short and contain no question mark, and the topic rules
//! on the current utterance have already been given their chance.

/// Trimmed utterances of this many chars or more are not "short".
pub const SHORT_UTTERANCE_MAX_CHARS: usize = 15;

/// A history-token group mapped to its continuation reply.
#[derive(Debug)]
pub struct ContinuationRule {
    pub tokens: &'static [&'static str],
    pub reply: &'static str,
}

/// Continuation groups, in the same priority order as the topic table.
pub static CONTINUATION_RULES: &[ContinuationRule] = &[
    ContinuationRule {
        tokens: &["budget", "spending"],
        reply: "Regarding budgeting, another useful tip is to review your budget regularly \
             and adjust as needed. Life circumstances change, and your budget should evolve \
             too. Many financial experts recommend the zero-based budgeting approach, where \
             every rupee is assigned a specific purpose.",
    },
    ContinuationRule {
        tokens: &["save", "saving"],
        reply: "On the subject of saving, consistency matters more than the amount. \
             Automating a small transfer every payday builds the habit, and keeping savings \
             in a separate account makes them much harder to spend by accident.",
    },
    ContinuationRule {
        tokens: &["invest"],
        reply: "When it comes to investments, diversification is crucial. Don't put all \
             your eggs in one basket. A mix of different asset classes (equity, debt, gold) \
             can help manage risk while still pursuing growth.",
    },
    ContinuationRule {
        tokens: &["debt", "loan"],
        reply: "About debt management, it's also important to check your credit score \
             regularly. In India, you can get a free credit report once a year from each of \
             the credit bureaus. A good credit score can help you qualify for lower \
             interest rates on future loans.",
    },
];

/// Continuation reply for a short, question-free utterance, keyed on the
/// concatenated lowercased history. `None` when the gate or every token
/// group misses.
pub fn continuation_reply(lower_utterance: &str, history: &[String]) -> Option<&'static str> {
    if lower_utterance.trim().chars().count() >= SHORT_UTTERANCE_MAX_CHARS
        || lower_utterance.contains('?')
    {
        return None;
    }

    let haystack = history.join(" ").to_lowercase();
    CONTINUATION_RULES
        .iter()
        .find(|r| r.tokens.iter().any(|t| haystack.contains(t)))
        .map(|r| r.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_budget_context() {
        let reply =
            continuation_reply("ok", &history(&["my spending is out of control"])).unwrap();
        assert!(reply.starts_with("Regarding budgeting"));
    }

    #[test]
    fn test_saving_context() {
        let reply = continuation_reply("ok", &history(&["I want to save money"])).unwrap();
        assert!(reply.starts_with("On the subject of saving"));
    }

    #[test]
    fn test_invest_context() {
        let reply = continuation_reply("go on", &history(&["thinking about investing"])).unwrap();
        assert!(reply.starts_with("When it comes to investments"));
    }

    #[test]
    fn test_debt_context() {
        let reply = continuation_reply("sure", &history(&["my loan payments"])).unwrap();
        assert!(reply.starts_with("About debt management"));
    }

    #[test]
    fn test_history_is_case_insensitive() {
        let reply = continuation_reply("ok", &history(&["MY BUDGET"])).unwrap();
        assert!(reply.starts_with("Regarding budgeting"));
    }

    #[test]
    fn test_group_order_budget_before_invest() {
        let hist = history(&["should i invest", "fix my budget"]);
        let reply = continuation_reply("ok", &hist).unwrap();
        assert!(reply.starts_with("Regarding budgeting"));
    }

    #[test]
    fn test_haystack_spans_entries() {
        // Tokens live in different history entries; the joined haystack sees both.
        let hist = history(&["nothing relevant", "then a loan came up"]);
        let reply = continuation_reply("ok", &hist).unwrap();
        assert!(reply.starts_with("About debt management"));
    }

    #[test]
    fn test_question_mark_blocks_gate() {
        assert!(continuation_reply("ok?", &history(&["my budget"])).is_none());
    }

    #[test]
    fn test_length_gate_boundary() {
        let hist = history(&["my budget"]);
        // 14 chars: short.
        assert!(continuation_reply("fourteen chars", &hist).is_some());
        // 15 chars: not short.
        assert!(continuation_reply("fifteen chars..", &hist).is_none());
    }

    #[test]
    fn test_length_gate_counts_chars_not_bytes() {
        // 14 chars but more than 15 bytes.
        let utterance = "\u{20b9}\u{20b9}\u{20b9}\u{20b9}\u{20b9}\u{20b9}12345678";
        assert_eq!(utterance.chars().count(), 14);
        assert!(utterance.len() > 15);
        assert!(continuation_reply(utterance, &history(&["my budget"])).is_some());
    }

    #[test]
    fn test_length_gate_uses_trimmed_utterance() {
        let hist = history(&["my budget"]);
        assert!(continuation_reply("   ok   ", &hist).is_some());
    }

    #[test]
    fn test_no_topic_tokens_in_history() {
        assert!(continuation_reply("ok", &history(&["hello there"])).is_none());
    }

    #[test]
    fn test_empty_history() {
        assert!(continuation_reply("ok", &[]).is_none());
    }
}
