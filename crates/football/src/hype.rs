use rand::Rng;
use rand::seq::SliceRandom;

pub const DEFAULT_PHRASES: &[&str] = &[
    "GLORY GLORY MAN UNITED",
    "GLAZERS COULD NEVER",
    "CARRICK'S AT THE WHEEL",
    "VIBES FC",
    "WE GO AGAIN",
    "BUILT DIFFERENT",
    "THE THEATRE OF MEMES",
    "WE DON'T LOSE",
];

/// Cosmetic taglines shown next to the streak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypeConfig {
    pub phrases: Vec<String>,
}

impl Default for HypeConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl HypeConfig {
    /// Uniform pick; `None` when the list is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.phrases.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pick_comes_from_list() {
        let config = HypeConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let phrase = config.pick(&mut rng).unwrap();
            assert!(DEFAULT_PHRASES.contains(&phrase));
        }
    }

    #[test]
    fn test_empty_list_picks_nothing() {
        let config = HypeConfig { phrases: Vec::new() };
        let mut rng = StdRng::seed_from_u64(7);
        assert!(config.pick(&mut rng).is_none());
    }
}
