//! Block shuffle and the perfect-sync chunk planner
//!
//! Rearranges grouped content into alternating fixed-size runs per show
//! ("ABABAB" scheduling). Perfect-sync mode extends every group to an
//! LCM-derived common length so each one completes whole blocks with no
//! leftover.

use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use airtime_core::types::Program;

use crate::dedupe::remove_duplicates;
use crate::grouping::group_programs;
use crate::shuffle::group_member_key;
use crate::sort::{sort_alphabetically, sort_by_release_date};
use crate::types::{ShuffleType, SortOrder};

/// Ceiling on perfect-sync loop count
const MAX_PERFECT_SYNC_LOOPS: i64 = 10_000;

/// Ceiling on total perfect-sync output items
const MAX_PERFECT_SYNC_ITEMS: i64 = 30_000;

/// How movies are ordered in fixed mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieSort {
    /// By title
    Alphabetical,

    /// By release date
    ReleaseDate,
}

/// Configuration for block shuffle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockShuffleOptions {
    /// Number of consecutive items per show block (default: 3)
    pub block_size: usize,

    /// Fixed (sorted) or randomized within-group order (default: fixed)
    pub shuffle_type: ShuffleType,

    /// Cycle short groups so every group yields the same number of
    /// blocks (default: true); ignored when `perfect_sync` is set
    pub loop_blocks: bool,

    /// Extend each group to the LCM-derived common length so all groups
    /// complete whole blocks (default: false). Callers must check
    /// [`can_use_perfect_sync`] first.
    pub perfect_sync: bool,

    /// Direction of each show's internal (season, episode) order
    pub show_order: SortOrder,

    /// Movie ordering in fixed mode
    pub movie_sort: MovieSort,

    /// Movie ordering direction
    pub movie_order: SortOrder,
}

impl Default for BlockShuffleOptions {
    fn default() -> Self {
        Self {
            block_size: 3,
            shuffle_type: ShuffleType::Fixed,
            loop_blocks: true,
            perfect_sync: false,
            show_order: SortOrder::Asc,
            movie_sort: MovieSort::Alphabetical,
            movie_order: SortOrder::Asc,
        }
    }
}

/// Output of a block shuffle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockShuffleResult {
    /// Round-robin interleave of every group's chunks
    pub programs: Vec<Program>,

    /// Movies and other ungrouped content, ordered per the movie options;
    /// the caller decides whether to append these
    pub ungrouped: Vec<Program>,
}

/// Least common multiple folded across the array
///
/// Returns `-1` for an empty array. Call sites depend on the sentinel to
/// tell "no groups" apart from a degenerate single-loop answer, so it is
/// never collapsed to `0` or `1`.
pub fn lcm_all(values: &[i64]) -> i64 {
    let Some((&first, rest)) = values.split_first() else {
        return -1;
    };
    rest.iter().fold(first, |acc, &value| lcm(acc, value))
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).saturating_mul(b).abs()
}

/// Per-group contribution to the synchronization target
///
/// A group whose length is an exact multiple of the block size contributes
/// its block count; any other group contributes its raw length. The raw
/// length (rather than a rounded-up block count) keeps the planner from
/// ever inventing partial blocks.
fn sync_count(len: usize, block_size: usize) -> i64 {
    if len % block_size == 0 {
        (len / block_size) as i64
    } else {
        len as i64
    }
}

/// Whether perfect sync stays within the output-size ceilings
///
/// Refuses when the LCM-derived loop count exceeds 10,000 or the projected
/// item total exceeds 30,000 (many groups with mutually coprime counts
/// explode the LCM). The planner itself does not re-validate; skipping
/// this check is a caller bug.
pub fn can_use_perfect_sync(programs: &[Program], block_size: usize) -> bool {
    let block_size = block_size.max(1);
    let counts: Vec<i64> = grouped_lists(programs)
        .iter()
        .map(|items| sync_count(items.len(), block_size))
        .collect();

    let loops = lcm_all(&counts);
    if loops < 0 {
        return true;
    }
    let fits =
        loops <= MAX_PERFECT_SYNC_LOOPS && loops.saturating_mul(block_size as i64) <= MAX_PERFECT_SYNC_ITEMS;
    if !fits {
        warn!(loops, block_size, "perfect sync refused: projected output too large");
    }
    fits
}

/// Block shuffle
///
/// Deduplicates the input, keeps content/custom entries, groups them by
/// show identity, chunks every group into `block_size` runs, and emits
/// chunk `i` of every group in round-robin before chunk `i + 1`. Movies
/// never join the interleave; they come back in
/// [`BlockShuffleResult::ungrouped`].
pub fn block_shuffle(programs: &[Program], options: &BlockShuffleOptions) -> BlockShuffleResult {
    let block_size = options.block_size.max(1);

    let mut candidates: Vec<Program> = remove_duplicates(programs)
        .into_iter()
        .filter(|p| matches!(p, Program::Content(_) | Program::Custom(_)))
        .collect();
    if candidates.is_empty() {
        return BlockShuffleResult::default();
    }

    if options.shuffle_type == ShuffleType::Random {
        candidates.shuffle(&mut thread_rng());
    }

    let (movie_groups, show_groups): (Vec<_>, Vec<_>) = group_programs(&candidates)
        .into_iter()
        .partition(|(key, _)| key == "movie");

    let mut ungrouped: Vec<Program> = movie_groups
        .into_iter()
        .flat_map(|(_, items)| items)
        .collect();
    let mut lists: Vec<Vec<Program>> = show_groups.into_iter().map(|(_, items)| items).collect();

    if options.shuffle_type == ShuffleType::Fixed {
        for items in &mut lists {
            items.sort_by_key(group_member_key);
            if options.show_order == SortOrder::Desc {
                items.reverse();
            }
        }
        ungrouped = match options.movie_sort {
            MovieSort::Alphabetical => sort_alphabetically(&ungrouped, options.movie_order),
            MovieSort::ReleaseDate => sort_by_release_date(&ungrouped, options.movie_order),
        };
    }

    if options.perfect_sync {
        let counts: Vec<i64> = lists
            .iter()
            .map(|items| sync_count(items.len(), block_size))
            .collect();
        let loops = lcm_all(&counts);
        if loops > 0 {
            let target = loops as usize * block_size;
            lists = lists.iter().map(|items| pad_cyclic(items, target)).collect();
        }
    } else if options.loop_blocks {
        let max_len = lists.iter().map(Vec::len).max().unwrap_or(0);
        lists = lists.iter().map(|items| pad_cyclic(items, max_len)).collect();
    }

    let chunked: Vec<Vec<&[Program]>> = lists
        .iter()
        .map(|items| items.chunks(block_size).collect())
        .collect();
    let loops = chunked.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = Vec::new();
    for i in 0..loops {
        for group in &chunked {
            if let Some(chunk) = group.get(i) {
                out.extend_from_slice(chunk);
            }
        }
    }

    BlockShuffleResult {
        programs: out,
        ungrouped,
    }
}

/// Extend a group to `target` items by cycling through its own items
///
/// Builds a new list from the old one; the source is never grown while
/// being read.
fn pad_cyclic(items: &[Program], target: usize) -> Vec<Program> {
    if items.is_empty() || target <= items.len() {
        return items.to_vec();
    }
    let mut out = Vec::with_capacity(target);
    for i in 0..target {
        out.push(items[i % items.len()].clone());
    }
    out
}

fn grouped_lists(programs: &[Program]) -> Vec<Vec<Program>> {
    let candidates: Vec<Program> = remove_duplicates(programs)
        .into_iter()
        .filter(|p| matches!(p, Program::Content(_) | Program::Custom(_)))
        .collect();
    group_programs(&candidates)
        .into_iter()
        .filter(|(key, _)| key != "movie")
        .map(|(_, items)| items)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use airtime_core::types::{ContentProgram, ContentSubtype, ProgramId, ShowId};

    fn episode(show: &str, number: u32) -> Program {
        let mut c = ContentProgram::new(
            ContentSubtype::Episode,
            format!("{show} e{number}"),
            60_000,
        );
        c.id = Some(ProgramId::new(format!("{show}-{number}")));
        c.persisted = true;
        c.show_id = Some(ShowId::new(show));
        c.season_number = Some(1);
        c.episode_number = Some(number);
        Program::Content(c)
    }

    fn show_of(program: &Program) -> String {
        program
            .content_detail()
            .and_then(|c| c.show_id.as_ref())
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn lcm_of_empty_is_the_sentinel() {
        assert_eq!(lcm_all(&[]), -1);
    }

    #[test]
    fn lcm_folds_pairwise() {
        assert_eq!(lcm_all(&[2, 3]), 6);
        assert_eq!(lcm_all(&[4, 6]), 12);
        assert_eq!(lcm_all(&[5]), 5);
    }

    #[test]
    fn sync_count_only_rounds_exact_multiples() {
        assert_eq!(sync_count(6, 3), 2);
        assert_eq!(sync_count(7, 3), 7);
        assert_eq!(sync_count(1, 3), 1);
    }

    #[test]
    fn fixed_mode_interleaves_blocks_round_robin() {
        let input = vec![
            episode("a", 1),
            episode("a", 2),
            episode("b", 1),
            episode("b", 2),
        ];
        let options = BlockShuffleOptions {
            block_size: 1,
            ..Default::default()
        };
        let result = block_shuffle(&input, &options);

        let shows: Vec<String> = result.programs.iter().map(show_of).collect();
        assert_eq!(shows, vec!["a", "b", "a", "b"]);
    }

    #[test]
    fn simple_mode_pads_short_groups_by_cycling() {
        let input = vec![
            episode("a", 1),
            episode("a", 2),
            episode("a", 3),
            episode("a", 4),
            episode("b", 1),
            episode("b", 2),
        ];
        let options = BlockShuffleOptions {
            block_size: 2,
            ..Default::default()
        };
        let result = block_shuffle(&input, &options);

        // Both groups padded to 4 items -> 2 chunks each, interleaved
        assert_eq!(result.programs.len(), 8);
        let shows: Vec<String> = result.programs.iter().map(show_of).collect();
        assert_eq!(shows, vec!["a", "a", "b", "b", "a", "a", "b", "b"]);
        // Group b's second chunk reuses its own items from the start
        assert_eq!(result.programs[6], episode("b", 1));
        assert_eq!(result.programs[7], episode("b", 2));
    }

    #[test]
    fn perfect_sync_emits_lcm_loops() {
        let input = vec![
            episode("a", 1),
            episode("a", 2),
            episode("b", 1),
            episode("b", 2),
            episode("b", 3),
        ];
        let options = BlockShuffleOptions {
            block_size: 1,
            perfect_sync: true,
            ..Default::default()
        };
        let result = block_shuffle(&input, &options);

        // counts [2, 3], LCM 6 loops, two groups of one item per chunk
        assert_eq!(result.programs.len(), 12);
        for chunk in result.programs.chunks(2) {
            assert_eq!(show_of(&chunk[0]), "a");
            assert_eq!(show_of(&chunk[1]), "b");
        }
    }

    #[test]
    fn perfect_sync_group_lengths_divide_by_block_size() {
        let input = vec![
            episode("a", 1),
            episode("a", 2),
            episode("a", 3),
            episode("b", 1),
            episode("b", 2),
        ];
        let options = BlockShuffleOptions {
            block_size: 2,
            perfect_sync: true,
            ..Default::default()
        };
        let result = block_shuffle(&input, &options);

        for show in ["a", "b"] {
            let count = result
                .programs
                .iter()
                .filter(|p| show_of(p) == show)
                .count();
            assert_eq!(count % 2, 0, "group {show} has a partial block");
        }
    }

    #[test]
    fn movies_are_returned_separately() {
        let mut movie = ContentProgram::new(ContentSubtype::Movie, "Heat", 6_000_000);
        movie.id = Some(ProgramId::new("m-1"));
        movie.persisted = true;

        let input = vec![episode("a", 1), Program::Content(movie)];
        let result = block_shuffle(&input, &BlockShuffleOptions::default());

        assert_eq!(result.programs.len(), 1);
        assert_eq!(result.ungrouped.len(), 1);
        assert_eq!(result.ungrouped[0].title(), Some("Heat"));
    }

    #[test]
    fn guard_refuses_pathological_lcm() {
        // Coprime group sizes 7, 11, 13, 17 with block size 3: every count
        // stays a raw length, LCM 17017 > 10000.
        let mut input = Vec::new();
        for (show, len) in [("a", 7), ("b", 11), ("c", 13), ("d", 17)] {
            for number in 0..len {
                input.push(episode(show, number));
            }
        }
        assert!(!can_use_perfect_sync(&input, 3));
    }

    #[test]
    fn guard_accepts_small_lineups_and_empty_input() {
        let input = vec![episode("a", 1), episode("b", 1)];
        assert!(can_use_perfect_sync(&input, 3));
        assert!(can_use_perfect_sync(&[], 3));
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let result = block_shuffle(&[], &BlockShuffleOptions::default());
        assert!(result.programs.is_empty());
        assert!(result.ungrouped.is_empty());
    }
}
