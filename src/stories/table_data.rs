//! Generated rows for the table story.
//!
//! Rows are produced from a seeded RNG so the same seed always yields the
//! same table.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Brian", "Claude", "Dennis", "Donald", "Edsger", "Frances",
    "Grace", "Guido", "John", "Ken", "Leslie", "Margaret", "Niklaus", "Radia", "Tony",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Turing", "Liskov", "Kernighan", "Shannon", "Ritchie", "Knuth", "Dijkstra",
    "Allen", "Hopper", "van Rossum", "McCarthy", "Thompson", "Lamport", "Hamilton", "Wirth",
    "Perlman", "Hoare",
];

const DOMAINS: &[&str] = &["example.com", "example.org", "mail.example.net", "corp.example"];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
];

/// One row of the table story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub text: String,
    pub email: String,
}

impl TableRow {
    /// Cell values in column order.
    pub fn cells(&self) -> [&str; 3] {
        [&self.name, &self.text, &self.email]
    }

    fn generate(rng: &mut StdRng) -> Self {
        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ada");
        let last = LAST_NAMES.choose(rng).copied().unwrap_or("Lovelace");
        let domain = DOMAINS.choose(rng).copied().unwrap_or("example.com");

        let local = format!("{}.{}", first, last)
            .to_lowercase()
            .replace(' ', "");
        let suffix: u16 = rng.gen_range(1..1000);

        Self {
            name: format!("{} {}", first, last),
            text: sentences(rng),
            email: format!("{}{}@{}", local, suffix, domain),
        }
    }
}

/// Generates `count` rows from `seed`.
pub fn generate_rows(count: usize, seed: u64) -> Vec<TableRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| TableRow::generate(&mut rng)).collect()
}

fn sentences(rng: &mut StdRng) -> String {
    let num_sentences = rng.gen_range(2..=4);
    let mut out = Vec::with_capacity(num_sentences);

    for _ in 0..num_sentences {
        let num_words = rng.gen_range(4..=10);
        let words: Vec<&str> = (0..num_words)
            .filter_map(|_| LOREM.choose(rng).copied())
            .collect();
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get(..1) {
            sentence = format!("{}{}", first.to_uppercase(), &sentence[1..]);
        }
        sentence.push('.');
        out.push(sentence);
    }

    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate_rows(10, 42);
        let second = generate_rows(10, 42);
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generate_rows(10, 1), generate_rows(10, 2));
    }

    #[test]
    fn test_row_shape() {
        for row in generate_rows(25, 7) {
            assert!(row.name.contains(' '));
            assert!(row.email.contains('@'));
            assert!(!row.email.contains(' '));
            assert!(row.text.ends_with('.'));
            assert!(row.text.chars().next().unwrap().is_uppercase());
            assert_eq!(row.cells()[2], row.email);
        }
    }

    #[test]
    fn test_zero_rows() {
        assert!(generate_rows(0, 42).is_empty());
    }
}
