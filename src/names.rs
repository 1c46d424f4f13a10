// src/names.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seeded unique full-name generation
//!
//! Names are assembled from fixed word pools using a small set of weighted
//! formats (plain, prefixed, suffixed). The source keeps every name it has
//! handed out and retries on collisions; once the retry budget is spent the
//! pools are treated as exhausted.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::constants::UNIQUE_NAME_ATTEMPTS;
use crate::error::{GenError, Result};

const MALE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
    "Donald", "Steven", "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian",
    "George", "Edward", "Ronald", "Timothy", "Jason", "Jeffrey", "Ryan", "Jacob",
    "Gary", "Nicholas", "Eric", "Stephen", "Jonathan", "Larry", "Justin", "Scott",
    "Brandon", "Benjamin", "Samuel", "Frank", "Gregory", "Raymond", "Alexander",
    "Patrick", "Jack", "Dennis", "Jerry", "Tyler", "Aaron", "Jose", "Adam",
    "Henry", "Nathan", "Douglas", "Zachary", "Peter", "Kyle", "Walter", "Ethan",
    "Jeremy", "Harold", "Keith", "Christian", "Roger", "Noah", "Gerald", "Carl",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
    "Jessica", "Sarah", "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra",
    "Ashley", "Dorothy", "Kimberly", "Emily", "Donna", "Michelle", "Carol",
    "Amanda", "Melissa", "Deborah", "Stephanie", "Rebecca", "Laura", "Sharon",
    "Cynthia", "Kathleen", "Amy", "Shirley", "Angela", "Helen", "Anna", "Brenda",
    "Pamela", "Nicole", "Emma", "Samantha", "Katherine", "Christine", "Debra",
    "Rachel", "Catherine", "Carolyn", "Janet", "Ruth", "Maria", "Heather",
    "Diane", "Virginia", "Julie", "Joyce", "Victoria", "Olivia", "Kelly",
    "Christina", "Lauren", "Joan", "Evelyn", "Judith", "Megan", "Cheryl", "Andrea",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
    "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill",
    "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
    "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner",
    "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris",
    "Morales", "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper",
    "Peterson", "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox",
    "Ward", "Richardson", "Watson", "Brooks", "Chavez", "Wood", "James", "Bennett",
    "Gray", "Mendoza", "Ruiz", "Hughes", "Price", "Alvarez", "Castillo", "Sanders",
];

const MALE_PREFIXES: &[&str] = &["Mr.", "Dr."];

const FEMALE_PREFIXES: &[&str] = &["Mrs.", "Ms.", "Miss", "Dr."];

const SUFFIXES: &[&str] = &["Jr.", "Sr.", "II", "III", "IV", "V", "MD", "DDS", "PhD", "DVM"];

/// First names and the prefixes that go with them
#[derive(Debug, Clone, Copy)]
pub struct FirstNamePool {
    pub first: &'static [&'static str],
    pub prefixes: &'static [&'static str],
}

/// Word pools a [`UniqueNames`] source draws from
#[derive(Debug, Clone, Copy)]
pub struct NamePools {
    pub male: FirstNamePool,
    pub female: FirstNamePool,
    pub last: &'static [&'static str],
    pub suffixes: &'static [&'static str],
}

impl Default for NamePools {
    fn default() -> Self {
        Self {
            male: FirstNamePool {
                first: MALE_FIRST_NAMES,
                prefixes: MALE_PREFIXES,
            },
            female: FirstNamePool {
                first: FEMALE_FIRST_NAMES,
                prefixes: FEMALE_PREFIXES,
            },
            last: LAST_NAMES,
            suffixes: SUFFIXES,
        }
    }
}

/// Seeded name source that never repeats a value
pub struct UniqueNames {
    rng: Xoshiro256PlusPlus,
    pools: NamePools,
    seen: HashSet<String>,
    max_attempts: usize,
}

impl UniqueNames {
    pub fn new(seed: u64) -> Self {
        Self::with_pools(seed, NamePools::default())
    }

    pub fn with_pools(seed: u64, pools: NamePools) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            pools,
            seen: HashSet::new(),
            max_attempts: UNIQUE_NAME_ATTEMPTS,
        }
    }

    /// Number of distinct names handed out so far
    pub fn issued(&self) -> usize {
        self.seen.len()
    }

    /// Draw a name not returned before by this source
    pub fn next_name(&mut self) -> Result<String> {
        for attempt in 0..self.max_attempts {
            let candidate = self.compose();
            if !self.seen.contains(&candidate) {
                if attempt > 0 {
                    tracing::trace!("Unique name found after {} retries", attempt);
                }
                self.seen.insert(candidate.clone());
                return Ok(candidate);
            }
        }

        tracing::debug!(
            "Name pools exhausted with {} names issued",
            self.seen.len()
        );
        Err(GenError::NamesExhausted {
            attempts: self.max_attempts,
        })
    }

    fn compose(&mut self) -> String {
        // Prefix and first name always come from the same pool
        let pool = if self.rng.random_bool(0.5) {
            self.pools.male
        } else {
            self.pools.female
        };
        let first = pick(&mut self.rng, pool.first);
        let last = pick(&mut self.rng, self.pools.last);

        // Weighted formats: mostly plain, occasionally decorated
        let format = self.rng.random_range(0..20u32);
        let prefix = if format == 0 || format == 1 {
            pick(&mut self.rng, pool.prefixes)
        } else {
            ""
        };
        let suffix = if format == 1 || format == 2 {
            pick(&mut self.rng, self.pools.suffixes)
        } else {
            ""
        };

        let mut name = String::with_capacity(32);
        for part in [prefix, first, last, suffix] {
            if part.is_empty() {
                continue;
            }
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(part);
        }
        name
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    if pool.is_empty() {
        return "";
    }
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_unique() {
        let mut names = UniqueNames::new(42);
        let mut all = HashSet::new();
        for _ in 0..5000 {
            let name = names.next_name().unwrap();
            assert!(!name.is_empty());
            assert!(all.insert(name));
        }
        assert_eq!(names.issued(), 5000);
    }

    #[test]
    fn test_names_reproducible() {
        let mut a = UniqueNames::new(1234);
        let mut b = UniqueNames::new(1234);
        for _ in 0..200 {
            assert_eq!(a.next_name().unwrap(), b.next_name().unwrap());
        }

        let mut c = UniqueNames::new(4321);
        let first_a: Vec<String> = (0..20).map(|_| a.next_name().unwrap()).collect();
        let first_c: Vec<String> = (0..20).map(|_| c.next_name().unwrap()).collect();
        assert_ne!(first_a, first_c);
    }

    #[test]
    fn test_names_exhausted() {
        let only_ada = FirstNamePool {
            first: &["Ada"],
            prefixes: &[],
        };
        let pools = NamePools {
            male: only_ada,
            female: only_ada,
            last: &["Lovelace"],
            suffixes: &[],
        };
        let mut names = UniqueNames::with_pools(0, pools);
        assert_eq!(names.next_name().unwrap(), "Ada Lovelace");
        match names.next_name() {
            Err(GenError::NamesExhausted { attempts }) => {
                assert_eq!(attempts, UNIQUE_NAME_ATTEMPTS)
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn test_name_shape() {
        let mut names = UniqueNames::new(8);
        for _ in 0..500 {
            let name = names.next_name().unwrap();
            let words = name.split(' ').count();
            assert!((2..=4).contains(&words), "odd name {:?}", name);
            assert!(!name.starts_with(' ') && !name.ends_with(' '));
        }
    }

    #[test]
    fn test_prefix_matches_first_name_pool() {
        let mut names = UniqueNames::new(21);
        let mut prefixed = 0;
        for _ in 0..4000 {
            let name = names.next_name().unwrap();
            let mut words = name.split(' ');
            let (Some(head), Some(next)) = (words.next(), words.next()) else {
                panic!("odd name {:?}", name);
            };
            match head {
                "Mr." => assert!(MALE_FIRST_NAMES.contains(&next), "{:?}", name),
                "Mrs." | "Ms." | "Miss" => {
                    assert!(FEMALE_FIRST_NAMES.contains(&next), "{:?}", name)
                }
                "Dr." => assert!(
                    MALE_FIRST_NAMES.contains(&next) || FEMALE_FIRST_NAMES.contains(&next)
                ),
                _ => continue,
            }
            prefixed += 1;
        }
        assert!(prefixed > 0);
    }
}
