//! The topic decision table.
//!
//! Rules are data: an ordered list of topics, each with lowercase substring
//! triggers and an ordered list of sub-rules refining the reply by intent.
//! Evaluation is first-match-wins at both levels, so priority is auditable
//! by reading the table top to bottom.

use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

/// Conversation topics the assistant recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Budget,
    Saving,
    Investing,
    Debt,
    Tax,
    Retirement,
    Insurance,
    AppHelp,
}

/// An intent refinement inside a topic: when one of its triggers occurs in
/// the utterance, its reply is used instead of the topic fallback.
#[derive(Debug)]
pub struct SubRule {
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

/// A topic matcher with its ordered sub-rules and generic reply.
#[derive(Debug)]
pub struct TopicRule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
    pub sub_rules: &'static [SubRule],
    pub fallback: &'static str,
}

impl TopicRule {
    /// True when any trigger occurs in the lowercased utterance.
    pub fn matches(&self, lower: &str) -> bool {
        self.triggers.iter().any(|t| lower.contains(t))
    }

    /// Reply for the lowercased utterance: first matching sub-rule wins,
    /// otherwise the topic's generic reply.
    pub fn reply_for(&self, lower: &str) -> &'static str {
        self.sub_rules
            .iter()
            .find(|sr| sr.triggers.iter().any(|t| lower.contains(t)))
            .map(|sr| sr.reply)
            .unwrap_or(self.fallback)
    }
}

// =============================================================================
// Pre-topic rules
// =============================================================================

/// Fixed reply when the utterance opens with a greeting token.
pub const GREETING_REPLY: &str =
    "Hello! I'm your AI budget assistant. How can I help with your finances today?";

/// Fixed reply when the utterance contains a thanks token.
pub const GRATITUDE_REPLY: &str =
    "You're welcome! I'm here to help with any other financial questions you might have.";

/// Fixed reply when the user asks about the assistant itself.
pub const SELF_DESCRIPTION_REPLY: &str = "I'm an AI budget assistant designed to help you \
     manage your finances better. I can provide advice on budgeting, saving, investing, and \
     general financial planning. While I'm not a licensed financial advisor, I can offer \
     general guidance based on common financial principles.";

/// Tokens that signal gratitude ("thank" also covers "thanks", "thank you").
pub const GRATITUDE_TOKENS: &[&str] = &["thank", "thx"];

/// Phrases that ask about the assistant itself.
pub const SELF_QUERY_PHRASES: &[&str] = &[
    "who are you",
    "what are you",
    "tell me about yourself",
    "how do you work",
    "what can you do",
];

// =============================================================================
// Topic table
// =============================================================================

/// The topic decision table, highest priority first.
///
/// Triggers are plain substring containment, so "budgeting" fires the
/// "budget" trigger and "investment" fires "invest". The listed order is the
/// tie-break: an utterance naming several topics gets the first one here.
pub static TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Budget,
        triggers: &["budget", "budgeting"],
        sub_rules: &[
            SubRule {
                triggers: &["create", "make", "start"],
                reply: "To create an effective budget, start by tracking all your income \
                     sources and categorizing your expenses. The 50/30/20 rule is a good \
                     starting point: 50% on needs, 30% on wants, and 20% on savings and debt \
                     repayment. In this app, you can add your transactions and categorize \
                     them to automatically track against your budget.",
            },
            SubRule {
                triggers: &["tips", "advice", "help"],
                reply: "Here are some budgeting tips:\n\n1. Track every expense, no matter \
                     how small\n2. Set realistic spending limits for each category\n3. Review \
                     your budget regularly and adjust as needed\n4. Use automatic transfers \
                     for savings\n5. Plan for irregular expenses\n6. Include a small \"fun \
                     money\" category to avoid budget fatigue",
            },
        ],
        fallback: "Budgeting is the foundation of financial health. It helps you understand \
             your cash flow, prioritize spending, and achieve your financial goals. Would \
             you like specific advice on creating a budget or tips to stick to one?",
    },
    TopicRule {
        topic: Topic::Saving,
        triggers: &["save", "saving"],
        sub_rules: &[
            SubRule {
                triggers: &["emergency fund", "emergency savings"],
                reply: "An emergency fund is crucial! Aim to save 3-6 months of essential \
                     expenses in an easily accessible account. Start small if needed - even \
                     \u{20b9}1,000 per month adds up. Consider automating transfers to your \
                     emergency fund on payday so you don't have to think about it.",
            },
            SubRule {
                triggers: &["tips", "how"],
                reply: "To boost your savings:\n\n1. Automate your savings first - pay \
                     yourself first\n2. Follow the 24-hour rule for non-essential \
                     purchases\n3. Try the 50/30/20 rule (50% needs, 30% wants, 20% \
                     savings)\n4. Look for recurring subscriptions you can eliminate\n5. \
                     Consider using separate accounts for different savings goals\n6. Try \
                     no-spend days or weeks as a challenge",
            },
        ],
        fallback: "Saving money is crucial for financial security and achieving your goals. \
             I recommend starting with an emergency fund, then saving for specific goals \
             like major purchases, retirement, or education. How much of your income are \
             you currently able to save?",
    },
    TopicRule {
        topic: Topic::Investing,
        triggers: &["invest", "investment", "stock", "mutual fund"],
        sub_rules: &[
            SubRule {
                triggers: &["begin", "start", "how to"],
                reply: "To start investing in India:\n\n1. First, ensure you have an \
                     emergency fund and manageable debt\n2. Open a demat and trading account \
                     with a broker\n3. Get your KYC done\n4. Consider starting with index \
                     funds or ETFs\n5. For most beginners, SIPs (Systematic Investment \
                     Plans) in mutual funds are a good starting point\n6. Only invest money \
                     you won't need for at least 5 years\n\nRemember that all investments \
                     carry risk.",
            },
            SubRule {
                triggers: &["option", "type"],
                reply: "Common investment options in India include:\n\n1. Equity/Stocks - \
                     Higher risk, potentially higher returns\n2. Mutual Funds - \
                     Professionally managed, diversified portfolios\n3. Fixed Deposits - \
                     Lower risk, guaranteed returns\n4. Public Provident Fund (PPF) - \
                     Government-backed, tax advantages\n5. Real Estate - Physical property \
                     investment\n6. Gold - Traditional value storage\n7. National Pension \
                     System (NPS) - Long-term retirement saving\n\nThe right mix depends on \
                     your goals, timeline, and risk tolerance.",
            },
        ],
        fallback: "Investing is how you grow your wealth over time. It's important to \
             understand that different investments carry different levels of risk and \
             potential return. Before investing, consider your financial goals, time \
             horizon, and risk tolerance. Would you like to know about specific investment \
             options in India?",
    },
    TopicRule {
        topic: Topic::Debt,
        triggers: &["debt", "loan", "credit", "emi"],
        sub_rules: &[
            SubRule {
                triggers: &["pay off", "reduce", "manage"],
                reply: "To effectively pay down debt:\n\n1. List all debts with amounts, \
                     interest rates, and minimum payments\n2. Always pay at least the \
                     minimum on all debts\n3. For fastest results, use the avalanche method: \
                     put extra money toward the highest-interest debt first\n4. For \
                     psychological wins, try the snowball method: pay off the smallest debts \
                     first\n5. Consider debt consolidation if it would significantly lower \
                     your interest rate\n6. Avoid taking on new debt while paying down \
                     existing debt",
            },
            SubRule {
                triggers: &["good", "bad"],
                reply: "Not all debt is created equal. \"Good debt\" generally helps build \
                     wealth or increase income (like education loans or home loans that may \
                     appreciate). \"Bad debt\" typically finances consumption or \
                     depreciating assets (like high-interest credit card debt). However, \
                     even \"good debt\" should be approached carefully and kept at \
                     manageable levels.",
            },
        ],
        fallback: "Managing debt is an important part of your financial health. The key is \
             distinguishing between productive debt (like education loans) and high-cost \
             consumer debt (like credit card balances). What specific aspect of debt \
             management are you interested in?",
    },
    TopicRule {
        topic: Topic::Tax,
        triggers: &["tax", "taxes", "income tax"],
        sub_rules: &[SubRule {
            triggers: &["save", "deduction", "section 80"],
            reply: "In India, you can save on taxes through various deductions:\n\n1. \
                 Section 80C investments (up to \u{20b9}1.5 lakh): PPF, ELSS, life insurance \
                 premiums\n2. Section 80D: Health insurance premiums\n3. Section 80TTA: \
                 Interest earned on savings accounts\n4. Section 24: Interest on home \
                 loans\n5. NPS contributions under Section 80CCD\n\nConsider consulting a \
                 tax professional for advice specific to your situation.",
        }],
        fallback: "Tax planning is an important aspect of financial management. In India, \
             there are various tax-saving instruments and deductions available that can \
             help reduce your tax liability legally. Would you like to know about specific \
             tax-saving options?",
    },
    TopicRule {
        topic: Topic::Retirement,
        triggers: &["retire", "retirement"],
        sub_rules: &[],
        fallback: "Retirement planning in India typically involves:\n\n1. Employee \
             Provident Fund (EPF) or Public Provident Fund (PPF)\n2. National Pension \
             System (NPS)\n3. Equity mutual funds for long-term growth\n4. Senior Citizens \
             Savings Scheme (for when you retire)\n5. Pension plans from insurance \
             companies\n\nThe key is to start early and be consistent. Even small amounts \
             invested regularly can grow significantly over time due to compounding.",
    },
    TopicRule {
        topic: Topic::Insurance,
        triggers: &["insurance", "insure"],
        sub_rules: &[
            SubRule {
                triggers: &["health", "medical"],
                reply: "Health insurance is essential in India. Aim for coverage of at \
                     least \u{20b9}5-10 lakhs per person, considering the rising medical \
                     costs. Look for policies with good hospital networks, minimal \
                     exclusions, and reasonable waiting periods. Consider family floater \
                     plans if you have dependents.",
            },
            SubRule {
                triggers: &["life"],
                reply: "For life insurance, term insurance is typically the most \
                     cost-effective option. As a rule of thumb, your life cover should be \
                     at least 10 times your annual income. Focus on pure protection rather \
                     than insurance-investment hybrid products.",
            },
        ],
        fallback: "Insurance is about protecting yourself and your family from financial \
             hardship due to unexpected events. Key insurance types include health \
             insurance, term life insurance, auto insurance, and home insurance. What \
             specific type of insurance are you interested in learning about?",
    },
    TopicRule {
        topic: Topic::AppHelp,
        triggers: &["app", "this app", "application", "features"],
        sub_rules: &[],
        fallback: "This budget tracker helps you:\n\n1. Track your income and expenses\n2. \
             Visualize your spending patterns\n3. Set and monitor budgets\n4. Get insights \
             into your financial habits\n5. Plan for future financial goals\n\nExplore the \
             dashboard for your financial overview, the analytics view for deeper \
             insights, and your transaction history to review past spending.",
    },
];

/// First topic rule whose trigger occurs in the lowercased utterance.
pub fn match_topic(lower: &str) -> Option<&'static TopicRule> {
    TOPIC_RULES.iter().find(|r| r.matches(lower))
}

// =============================================================================
// Tests
// =============================================================================
