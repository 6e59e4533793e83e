use rand::{seq::SliceRandom, Rng};

const TOPIC: &str = "{topic}";

const ADVICE_TEMPLATES: [&str; 4] = [
    "Focus on consistency when working on {topic}.",
    "Break {topic} into smaller, manageable steps.",
    "Stay motivated by setting achievable goals for {topic}.",
    "Take regular breaks to maintain productivity while working on {topic}.",
];

const MOTIVATIONAL_QUOTES: [&str; 4] = [
    "Believe you can and you're halfway there.",
    "Every day is a second chance.",
    "You are capable of amazing things.",
    "Start where you are. Use what you have. Do what you can.",
];

/// One short suggestion about `topic`, drawn uniformly from the templates.
pub fn advice_for<R: Rng + ?Sized>(topic: &str, rng: &mut R) -> String {
    let template = ADVICE_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or(ADVICE_TEMPLATES[0]);
    template.replace(TOPIC, topic)
}

/// `"<task> - <advice>"`, the form used for filler picks and manual edits.
pub fn with_advice<R: Rng + ?Sized>(task: &str, rng: &mut R) -> String {
    format!("{task} - {}", advice_for(task, rng))
}

pub fn motivational_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_QUOTES
        .choose(rng)
        .copied()
        .unwrap_or(MOTIVATIONAL_QUOTES[0])
}

#[cfg(test)]
pub(crate) fn all_advice_for(topic: &str) -> Vec<String> {
    ADVICE_TEMPLATES
        .iter()
        .map(|template| template.replace(TOPIC, topic))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn advice_mentions_topic_and_comes_from_templates() {
        let mut rng = StdRng::seed_from_u64(7);
        let known = all_advice_for("Physics");
        for _ in 0..32 {
            let advice = advice_for("Physics", &mut rng);
            assert!(advice.contains("Physics"));
            assert!(known.contains(&advice), "unexpected advice: {advice}");
        }
    }

    #[test]
    fn every_template_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(advice_for("Reading", &mut rng));
        }
        assert_eq!(seen.len(), ADVICE_TEMPLATES.len());
    }

    #[test]
    fn with_advice_composes_task_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let composed = with_advice("Meal Prep", &mut rng);
        let advice = composed.strip_prefix("Meal Prep - ").unwrap();
        assert!(all_advice_for("Meal Prep").contains(&advice.to_string()));
    }

    #[test]
    fn quote_is_one_of_the_fixed_list() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(MOTIVATIONAL_QUOTES.contains(&motivational_quote(&mut rng)));
    }
}
