//! Partial similarity scoring for fuzzy substring matching
//!
//! A query is considered found in a line when it closely matches any
//! contiguous substring of it. The shorter string is slid over the longer
//! one and each window is compared with the normalized Indel similarity.
//!
//! Windows are pruned with a character-count upper bound before their LCS
//! is computed, and the LCS itself is bit-parallel, so scoring a line costs
//! roughly one pass over the longer string when nothing can match.

use std::collections::HashMap;

/// Per-character bit masks of a pattern, one bit per pattern position.
struct PatternMasks {
    len: usize,
    masks: HashMap<char, Vec<u64>>,
}

impl PatternMasks {
    fn new(pattern: &[char]) -> Self {
        let words = pattern.len().div_ceil(64);
        let mut masks: HashMap<char, Vec<u64>> = HashMap::new();
        for (i, c) in pattern.iter().enumerate() {
            masks.entry(*c).or_insert_with(|| vec![0; words])[i / 64] |= 1u64 << (i % 64);
        }
        PatternMasks {
            len: pattern.len(),
            masks,
        }
    }

    /// Length of the longest common subsequence of the pattern and `text`,
    /// in O(|text| * ceil(|pattern| / 64)).
    fn lcs_len(&self, text: &[char]) -> usize {
        let mut rows = vec![u64::MAX; self.len.div_ceil(64)];

        for c in text {
            let Some(mask) = self.masks.get(c) else {
                continue;
            };
            let mut carry = false;
            for (row, &m) in rows.iter_mut().zip(mask) {
                let matches = *row & m;
                let (sum, c1) = row.overflowing_add(matches);
                let (sum, c2) = sum.overflowing_add(carry as u64);
                carry = c1 || c2;
                *row = sum | (*row & !m);
            }
        }

        // Every zero bit among the pattern positions is one matched character
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let bits = (self.len - i * 64).min(64);
                let valid = if bits == 64 {
                    u64::MAX
                } else {
                    (1u64 << bits) - 1
                };
                bits - (row & valid).count_ones() as usize
            })
            .sum()
    }
}

/// Length of the longest common subsequence of `a` and `b`.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    PatternMasks::new(a).lcs_len(b)
}

/// Indel similarity scaled to 0-100. Exact whenever the true value is an
/// integer, so a window at exactly 90 is never pushed below the threshold.
fn indel_score(lcs: usize, a_len: usize, b_len: usize) -> f64 {
    (200 * lcs) as f64 / (a_len + b_len) as f64
}

fn indel_ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * lcs_len(a, b)) as f64 / total as f64
}

/// Normalized Indel similarity in `[0, 1]`: `2 * LCS / (|a| + |b|)`.
pub fn indel_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    indel_ratio_chars(&a, &b)
}

/// Character counts of a sliding window, limited to the pattern characters.
///
/// `shared` is the size of the multiset intersection between the window and
/// the pattern, an upper bound for their LCS.
struct WindowCounts<'p> {
    pattern: &'p HashMap<char, usize>,
    counts: HashMap<char, usize>,
    shared: usize,
}

impl<'p> WindowCounts<'p> {
    fn new(pattern: &'p HashMap<char, usize>) -> Self {
        WindowCounts {
            pattern,
            counts: HashMap::new(),
            shared: 0,
        }
    }

    fn push(&mut self, c: char) {
        let Some(&limit) = self.pattern.get(&c) else {
            return;
        };
        let count = self.counts.entry(c).or_insert(0);
        if *count < limit {
            self.shared += 1;
        }
        *count += 1;
    }

    fn pop(&mut self, c: char) {
        let Some(&limit) = self.pattern.get(&c) else {
            return;
        };
        if let Some(count) = self.counts.get_mut(&c) {
            *count -= 1;
            if *count < limit {
                self.shared -= 1;
            }
        }
    }
}

fn char_counts(chars: &[char]) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in chars {
        *counts.entry(*c).or_insert(0) += 1;
    }
    counts
}

/// Best similarity (0-100) between the shorter string and any window of the
/// longer one. Windows cut by either end of the longer string are included,
/// so a query overlapping the start or end of a line still aligns.
///
/// Identical strings score 100. Otherwise, an empty input scores 0. The
/// score is not rounded.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    partial_ratio_cutoff(a, b, 0.0)
}

/// Same as [`partial_ratio`], but returns 0 as soon as it is known that no
/// window can reach `score_cutoff`.
pub fn partial_ratio_cutoff(a: &str, b: &str, score_cutoff: f64) -> f64 {
    if a == b {
        return 100.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }

    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    let short_len = shorter.len();
    let long_len = longer.len();

    let pattern_counts = char_counts(&shorter);

    // No window shares more characters with the pattern than the whole
    // longer string does, and with `shared` fixed the best window length is
    // `shared` itself.
    let mut whole = WindowCounts::new(&pattern_counts);
    for c in &longer {
        whole.push(*c);
    }
    if whole.shared == 0 || indel_score(whole.shared, short_len, whole.shared) < score_cutoff {
        return 0.0;
    }

    let masks = PatternMasks::new(&shorter);
    let mut window = WindowCounts::new(&pattern_counts);
    let (mut lo, mut hi) = (0, 0);
    let mut best: f64 = 0.0;

    // Windows cut by the start, full-length windows, then windows cut by the end
    let windows = (1..=short_len)
        .map(|end| (0, end))
        .chain((1..=long_len - short_len).map(|start| (start, start + short_len)))
        .chain((long_len - short_len + 1..long_len).map(|start| (start, long_len)));

    for (start, end) in windows {
        while hi < end {
            window.push(longer[hi]);
            hi += 1;
        }
        while lo < start {
            window.pop(longer[lo]);
            lo += 1;
        }

        let window_len = end - start;
        let bound = indel_score(window.shared, short_len, window_len);
        if bound < score_cutoff || bound <= best {
            continue;
        }

        let score = indel_score(masks.lcs_len(&longer[start..end]), short_len, window_len);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }

    if best >= score_cutoff {
        best
    } else {
        0.0
    }
}
