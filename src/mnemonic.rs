// Mnemonic sentences — one silly line per keyword to help it stick.
//
// The random source is injected so callers (and tests) can seed it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sentence templates. `{word}` is replaced with the keyword.
pub const TEMPLATES: [&str; 7] = [
    "When you forget '{word}', imagine a llama trying to spell it with sunglasses 😎.",
    "'{word}' once tried to join a rock band, but forgot the lyrics!",
    "Never trust a cat that whispers '{word}' at midnight 🐱‍👤.",
    "If '{word}' were a snack, it would definitely be extra crunchy 🍪.",
    "Remember '{word}' like your Wi-Fi password — you never know when you'll need it!",
    "'{word}' sounds like a superhero that only fights grammar mistakes 🦸‍♂️.",
    "Picture '{word}' dancing salsa in your brain every time you study 💃.",
];

fn render(template: &str, word: &str) -> String {
    template.replace("{word}", word)
}

/// Pick one template uniformly at random and fill in `word`.
pub fn generate<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let template = TEMPLATES[rng.random_range(0..TEMPLATES.len())];
    render(template, word)
}

/// Every possible sentence for `word`, in template order.
pub fn render_all(word: &str) -> Vec<String> {
    TEMPLATES.iter().map(|t| render(t, word)).collect()
}

/// Seeded generator when a seed is given, otherwise freshly seeded from the OS.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_a_template() {
        let mut rng = seeded_rng(Some(7));
        let all = render_all("play");
        for _ in 0..50 {
            let s = generate("play", &mut rng);
            assert!(s.contains("play"));
            assert!(all.contains(&s), "unexpected sentence: {s}");
        }
    }

    #[test]
    fn test_same_seed_same_sentence() {
        let a = generate("dog", &mut seeded_rng(Some(42)));
        let b = generate("dog", &mut seeded_rng(Some(42)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_all_distinct() {
        let all = render_all("cat");
        assert_eq!(all.len(), 7);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 7);
    }
}
