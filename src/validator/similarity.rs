//! Block-based sequence similarity
//!
//! Computes the classic matching-blocks ratio `2M / T`: find the longest common
//! block, recurse into the regions left and right of it, sum the block sizes.
//! Scores must line up with the reference scorer, so the "popular element"
//! heuristic is reproduced too: once the second sequence has 200 or more
//! elements, elements that occur in it more than `len / 100 + 1` times cannot
//! seed a match (they can still extend one).

use std::collections::{HashMap, HashSet};

/// Sequences at least this long get popular elements pruned from the index
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matched block: `a[a_start..a_start + size] == b[b_start..b_start + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Greedy longest-match-first matcher over two character sequences
pub struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each non-popular element of `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            let popular: HashSet<char> = b2j
                .iter()
                .filter(|(_, idxs)| idxs.len() > ntest)
                .map(|(&ch, _)| ch)
                .collect();
            for ch in popular {
                b2j.remove(&ch);
            }
        }

        Self { a, b, b2j }
    }

    /// Longest block within `a[alo..ahi]` and `b[blo..bhi]`
    ///
    /// Ties resolve to the earliest block in `a`, then the earliest in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let (a, b) = (self.a, self.b);
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);

        // j2len[j] = length of the match ending at a[i-1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(ch) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = next;
        }

        // Popular elements were left out of the index; let them extend the block.
        while besti > alo && bestj > blo && a[besti - 1] == b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi && bestj + bestsize < bhi && a[besti + bestsize] == b[bestj + bestsize] {
            bestsize += 1;
        }

        MatchBlock {
            a_start: besti,
            b_start: bestj,
            size: bestsize,
        }
    }

    /// All matching blocks, ordered by position
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            if alo < m.a_start && blo < m.b_start {
                pending.push((alo, m.a_start, blo, m.b_start));
            }
            if m.a_start + m.size < ahi && m.b_start + m.size < bhi {
                pending.push((m.a_start + m.size, ahi, m.b_start + m.size, bhi));
            }
            blocks.push(m);
        }

        blocks.sort_by_key(|m| (m.a_start, m.b_start));
        blocks
    }

    /// Similarity ratio in `[0, 1]`; two empty sequences are identical
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        2.0 * matched as f64 / total as f64
    }
}

/// Similarity ratio of two strings, compared character by character
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}
