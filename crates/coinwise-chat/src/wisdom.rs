//! Default-fallback reply composition.
//!
//! When no rule matches, the assistant admits it and offers one aphorism
//! from a fixed set, drawn uniformly at random.

use rand::Rng;

/// Disclaimer prepended to every fallback reply.
pub const FALLBACK_PREFIX: &str = "I'm not sure I understand that query specifically. ";

/// Rephrase prompt appended to every fallback reply.
pub const FALLBACK_SUFFIX: &str = "\n\nCan you try rephrasing your question about budgeting, \
     saving, investing, or debt management?";

/// The fixed aphorism set for the fallback draw.
pub const FINANCIAL_WISDOM: &[&str] = &[
    "A budget is telling your money where to go instead of wondering where it went.",
    "Financial freedom isn't about being rich, it's about having options.",
    "The best time to start saving was 10 years ago. The second best time is now.",
    "It's not how much money you make, but how much money you keep.",
    "Don't save what is left after spending; spend what is left after saving.",
    "Beware of little expenses; a small leak will sink a great ship.",
    "An investment in knowledge pays the best interest.",
    "In investing, what is comfortable is rarely profitable.",
    "The stock market is a device for transferring money from the impatient to the patient.",
];

/// Compose the fallback reply: prefix + uniformly drawn aphorism + suffix.
pub fn fallback_reply<R: Rng + ?Sized>(rng: &mut R) -> String {
    let aphorism = FINANCIAL_WISDOM[rng.gen_range(0..FINANCIAL_WISDOM.len())];
    format!("{}{}{}", FALLBACK_PREFIX, aphorism, FALLBACK_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fallback_reply_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let reply = fallback_reply(&mut rng);
        assert!(reply.starts_with(FALLBACK_PREFIX));
        assert!(reply.ends_with(FALLBACK_SUFFIX));
    }

    #[test]
    fn test_fallback_reply_contains_one_aphorism() {
        let mut rng = StdRng::seed_from_u64(2);
        let reply = fallback_reply(&mut rng);
        let matches = FINANCIAL_WISDOM
            .iter()
            .filter(|a| reply.contains(*a))
            .count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_fallback_reply_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(fallback_reply(&mut a), fallback_reply(&mut b));
    }

    #[test]
    fn test_all_aphorisms_reachable() {
        let mut seen = std::collections::HashSet::new();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..2000 {
            let reply = fallback_reply(&mut rng);
            let aphorism = FINANCIAL_WISDOM
                .iter()
                .find(|a| reply.contains(*a))
                .unwrap();
            seen.insert(*aphorism);
        }
        assert_eq!(seen.len(), FINANCIAL_WISDOM.len());
    }

    #[test]
    fn test_wisdom_set_is_fixed_size() {
        assert_eq!(FINANCIAL_WISDOM.len(), 9);
    }
}
