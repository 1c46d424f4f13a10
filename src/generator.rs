// src/generator.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! People generation and the friend reciprocity pass
//!
//! All randomness flows through explicitly seeded Xoshiro256++ streams: one
//! general stream for tags, interactions and friends, and one independent
//! stream owned by the unique name source. Same seed and config produce the
//! same people, byte for byte.

use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::Result;
use crate::names::UniqueNames;
use crate::sampler::{get_random_items, percent_roll_check};

/// Interaction counts for one hashtag; absent kinds are omitted from JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted: Option<u32>,
}

/// Kinds of hashtag interaction, in the order they are rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Liked,
    Posted,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 2] = [InteractionKind::Liked, InteractionKind::Posted];
}

impl Interactions {
    pub fn set(&mut self, kind: InteractionKind, count: u32) {
        match kind {
            InteractionKind::Liked => self.liked = Some(count),
            InteractionKind::Posted => self.posted = Some(count),
        }
    }

    pub fn get(&self, kind: InteractionKind) -> Option<u32> {
        match kind {
            InteractionKind::Liked => self.liked,
            InteractionKind::Posted => self.posted,
        }
    }
}

/// One synthetic person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// 1-based, dense
    pub id: usize,
    pub name: String,
    pub tags: IndexMap<String, Interactions>,
    /// Friend ids in [1, N]; may repeat
    pub friends: Vec<usize>,
}

/// Which friend id gets pruned from a freshly drawn friend list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FriendPruning {
    /// Remove the first occurrence of the person's own id
    #[default]
    SelfId,
    /// Remove the first occurrence of the last friend-draw index
    /// (`friend_count - 1`), the historical pruning rule
    Legacy,
}

impl FriendPruning {
    /// Value to remove for person `id` after `friend_count` draws
    pub fn target(self, id: usize, friend_count: usize) -> Option<usize> {
        match self {
            FriendPruning::SelfId => Some(id),
            FriendPruning::Legacy => friend_count.checked_sub(1),
        }
    }
}

/// Configuration for people generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of people to generate
    pub records: usize,
    /// Seed for both the general and the name stream
    pub seed: u64,
    /// Friend pruning rule applied after friend draws
    pub friend_pruning: FriendPruning,
    /// Maximum hashtags drawn per person (at least 1)
    pub max_tags: usize,
    /// Interaction kinds are omitted when a d100 roll is at or below this
    pub interaction_skip_threshold: u32,
    /// Interaction counts are drawn from 0..=max_interaction_count
    pub max_interaction_count: u32,
    /// Friend counts are drawn from 0..=max_friends
    pub max_friends: usize,
    /// Friendships are not reciprocated when a d100 roll is at or below this
    pub reciprocity_threshold: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: DEFAULT_SINGLE_RECORDS,
            seed: DEFAULT_SEED,
            friend_pruning: FriendPruning::SelfId,
            max_tags: MAX_TAGS,
            interaction_skip_threshold: INTERACTION_SKIP_THRESHOLD,
            max_interaction_count: MAX_INTERACTION_COUNT,
            max_friends: MAX_FRIENDS,
            reciprocity_threshold: RECIPROCITY_THRESHOLD,
        }
    }
}

/// Simple API: generate `records` people from `seed` with default settings
///
/// # Example
/// ```rust
/// use social_gen::generate_people_simple;
///
/// let people = generate_people_simple(5, 1).unwrap();
/// assert_eq!(people.len(), 5);
/// assert_eq!(people[0].id, 1);
/// ```
pub fn generate_people_simple(records: usize, seed: u64) -> Result<Vec<Person>> {
    let config = GeneratorConfig {
        records,
        seed,
        ..Default::default()
    };
    generate_dataset(config)
}

/// Generate people with full configuration, reciprocity pass included
pub fn generate_dataset(config: GeneratorConfig) -> Result<Vec<Person>> {
    PeopleGenerator::new(config).generate()
}

/// Seeded generator owning both random streams
pub struct PeopleGenerator {
    config: GeneratorConfig,
    rng: Xoshiro256PlusPlus,
    names: UniqueNames,
}

impl PeopleGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        tracing::debug!(
            "PeopleGenerator seeded: seed={}, name_seed={}",
            config.seed,
            config.seed.wrapping_add(NAME_STREAM_OFFSET)
        );
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(config.seed),
            names: UniqueNames::new(config.seed.wrapping_add(NAME_STREAM_OFFSET)),
            config,
        }
    }

    /// Build all people, then run one reciprocity pass over them
    pub fn generate(&mut self) -> Result<Vec<Person>> {
        tracing::info!(
            "Starting people generation: records={}, seed={}, pruning={:?}",
            self.config.records,
            self.config.seed,
            self.config.friend_pruning
        );

        let mut people = generate_people(&mut self.rng, &mut self.names, &self.config)?;
        let added = reciprocate_friends(
            &mut self.rng,
            &mut people,
            self.config.reciprocity_threshold,
        );

        tracing::info!(
            "Generated {} people, {} friendships reciprocated",
            people.len(),
            added
        );
        Ok(people)
    }
}

/// Build `config.records` people in id order, before any reciprocity
pub fn generate_people<R: Rng + ?Sized>(
    rng: &mut R,
    names: &mut UniqueNames,
    config: &GeneratorConfig,
) -> Result<Vec<Person>> {
    let records = config.records;
    let mut people = Vec::with_capacity(records);

    for index in 0..records {
        let id = index + 1;
        let name = names.next_name()?;

        let picked = get_random_items(rng, &HASHTAGS, config.max_tags, 0)?;
        let mut tags = IndexMap::with_capacity(picked.len());
        for tag in picked {
            let mut interactions = Interactions::default();
            for kind in InteractionKind::ALL {
                if !percent_roll_check(rng, config.interaction_skip_threshold) {
                    continue;
                }
                interactions.set(kind, rng.random_range(0..=config.max_interaction_count));
            }
            tags.insert(tag.to_string(), interactions);
        }

        let friend_count = rng.random_range(0..=config.max_friends);
        let mut friends: Vec<usize> = (0..friend_count)
            .map(|_| rng.random_range(1..=records))
            .collect();

        if let Some(target) = config.friend_pruning.target(id, friend_count) {
            if let Some(pos) = friends.iter().position(|&f| f == target) {
                friends.remove(pos);
            }
        }

        tracing::trace!(
            "Person {}: {} tags, {} friends",
            id,
            tags.len(),
            friends.len()
        );

        people.push(Person {
            id,
            name,
            tags,
            friends,
        });
    }

    Ok(people)
}

/// Single forward pass turning some one-way friendships into mutual ones
///
/// Each outgoing edge rolls once; on a pass the reverse edge is appended to
/// the friend's list unless already there. Lists are mutated in place, so
/// later people see edges added while visiting earlier ones. Returns the
/// number of reverse edges added.
pub fn reciprocate_friends<R: Rng + ?Sized>(
    rng: &mut R,
    people: &mut [Person],
    threshold: u32,
) -> usize {
    let mut added = 0;

    for index in 0..people.len() {
        let person_id = index + 1;
        let mut j = 0;
        while j < people[index].friends.len() {
            let friend_id = people[index].friends[j];
            j += 1;

            if !percent_roll_check(rng, threshold) {
                continue;
            }

            let Some(friend) = friend_id
                .checked_sub(1)
                .and_then(|friend_index| people.get_mut(friend_index))
            else {
                tracing::warn!(
                    "Person {} references unknown friend id {}",
                    person_id,
                    friend_id
                );
                continue;
            };

            if !friend.friends.contains(&person_id) {
                friend.friends.push(person_id);
                added += 1;
            }
        }
    }

    tracing::debug!("Reciprocity pass added {} edges", added);
    added
}
