// src/generators/password.rs
use crate::generators::random::{FastRandom, RandomSource};
use crate::models::PasswordGenerationOptions;
use crate::strength::{self, StrengthResult};

pub struct PasswordGenerator<R = FastRandom> {
    random: R,
}

impl PasswordGenerator<FastRandom> {
    pub fn new() -> Self {
        PasswordGenerator { random: FastRandom::new() }
    }
}

impl Default for PasswordGenerator<FastRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_random(random: R) -> Self {
        PasswordGenerator { random }
    }

    /// Builds a password with at least one character of every selected class.
    ///
    /// Returns an empty string when no class is selected. The guarantee
    /// characters are always kept, so when `length` is smaller than the
    /// number of selected classes the result is longer than requested.
    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> String {
        let classes = options.selected_classes();

        let pool: Vec<u8> = classes
            .iter()
            .flat_map(|class| class.chars().iter().copied())
            .collect();

        if pool.is_empty() {
            log::debug!("No character class selected, generation declined");
            return String::new();
        }

        let mut buffer = Vec::with_capacity(options.length.max(classes.len()));

        // One guaranteed character per selected class
        for class in &classes {
            buffer.push(self.pick(class.chars()));
        }

        while buffer.len() < options.length {
            buffer.push(self.pick(&pool));
        }

        self.shuffle(&mut buffer);

        log::debug!(
            "Generated password of {} characters from a pool of {}",
            buffer.len(),
            pool.len()
        );

        // Every class is plain ASCII
        buffer.into_iter().map(char::from).collect()
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthResult {
        strength::evaluate(password)
    }

    fn pick(&mut self, set: &[u8]) -> u8 {
        set[self.random.next_index(set.len())]
    }

    // Fisher-Yates
    fn shuffle(&mut self, buffer: &mut [u8]) {
        for i in (1..buffer.len()).rev() {
            let j = self.random.next_index(i + 1);
            buffer.swap(i, j);
        }
    }
}

/// Generates with the default thread-local source.
pub fn generate_password(options: &PasswordGenerationOptions) -> String {
    PasswordGenerator::new().generate_password(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::random::SeededRandom;
    use crate::models::CharacterClass;
    use std::collections::HashMap;

    fn options_from_mask(mask: u8, length: usize) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length,
            include_uppercase: mask & 0b0001 != 0,
            include_lowercase: mask & 0b0010 != 0,
            include_numbers: mask & 0b0100 != 0,
            include_symbols: mask & 0b1000 != 0,
        }
    }

    #[test]
    fn test_every_selected_class_is_present() {
        let mut generator = PasswordGenerator::with_random(SeededRandom::new(2024));

        for mask in 1u8..16 {
            let options = options_from_mask(mask, 4);
            let classes = options.selected_classes();

            for length in [4, 5, 12, 33, 50] {
                let options = PasswordGenerationOptions { length, ..options.clone() };

                for _ in 0..25 {
                    let password = generator.generate_password(&options);
                    assert_eq!(password.chars().count(), length, "mask {:04b}", mask);

                    for class in &classes {
                        assert!(
                            password.chars().any(|c| class.contains(c)),
                            "{:?} missing from {} (mask {:04b})",
                            class,
                            password,
                            mask
                        );
                    }

                    assert!(password
                        .chars()
                        .all(|c| classes.iter().any(|class| class.contains(c))));
                }
            }
        }
    }

    #[test]
    fn test_no_class_selected_yields_empty_string() {
        let options = options_from_mask(0, 16);
        assert_eq!(generate_password(&options), "");

        let mut generator = PasswordGenerator::with_random(SeededRandom::new(3));
        assert_eq!(generator.generate_password(&options), "");
    }

    #[test]
    fn test_single_class_draws_only_from_that_class() {
        let mut generator = PasswordGenerator::with_random(SeededRandom::new(11));

        for class in CharacterClass::ALL {
            let options = PasswordGenerationOptions {
                length: 30,
                include_uppercase: class == CharacterClass::Uppercase,
                include_lowercase: class == CharacterClass::Lowercase,
                include_numbers: class == CharacterClass::Digits,
                include_symbols: class == CharacterClass::Symbols,
            };
            let password = generator.generate_password(&options);
            assert_eq!(password.len(), 30);
            assert!(password.chars().all(|c| class.contains(c)), "{:?}: {}", class, password);
        }
    }

    #[test]
    fn test_short_length_keeps_guarantee_characters() {
        let mut generator = PasswordGenerator::with_random(SeededRandom::new(5));
        let options = options_from_mask(0b1111, 2);

        let password = generator.generate_password(&options);
        assert_eq!(password.len(), 4);
        for class in CharacterClass::ALL {
            assert!(password.chars().any(|c| class.contains(c)));
        }
    }

    #[test]
    fn test_same_seed_same_password() {
        let options = PasswordGenerationOptions::default();
        let mut a = PasswordGenerator::with_random(SeededRandom::new(99));
        let mut b = PasswordGenerator::with_random(SeededRandom::new(99));
        assert_eq!(a.generate_password(&options), b.generate_password(&options));
    }

    #[test]
    fn test_guaranteed_characters_are_not_pinned_to_the_front() {
        let mut generator = PasswordGenerator::with_random(SeededRandom::new(17));
        let options = options_from_mask(0b0101, 20);

        // Uppercase is always the first guarantee character before shuffling
        let leading_upper = (0..200)
            .filter(|_| {
                let password = generator.generate_password(&options);
                password.starts_with(|c: char| c.is_ascii_uppercase())
            })
            .count();

        assert!(leading_upper > 0 && leading_upper < 200);
    }

    #[test]
    fn test_shuffle_is_uniform_over_permutations() {
        let mut generator = PasswordGenerator::with_random(SeededRandom::new(8));
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

        for _ in 0..6000 {
            let mut buffer = vec![b'a', b'b', b'c'];
            generator.shuffle(&mut buffer);
            *counts.entry(buffer).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for (permutation, count) in counts {
            assert!(
                (850..=1150).contains(&count),
                "permutation {:?} seen {} times",
                permutation,
                count
            );
        }
    }

    #[test]
    fn test_generated_password_can_be_scored() {
        let mut generator = PasswordGenerator::with_random(SeededRandom::new(21));
        let options = PasswordGenerationOptions { length: 16, ..Default::default() };
        let password = generator.generate_password(&options);

        let result = generator.analyze_password_strength(&password);
        assert_eq!(result.score, 7);
        assert!(result.suggestions.is_empty());
    }
}
