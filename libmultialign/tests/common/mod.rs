#![allow(dead_code)]

use libmultialign::align::column_score;
use libmultialign::align::structs::{Entry, Score, ScoreParams};
use libmultialign::alphabet::GAP_MARKER;
use libmultialign::structs::Sequence;

pub fn sequences(seqs: &[&[u8]]) -> Vec<Sequence> {
    seqs.iter()
        .map(|s| Sequence::from_utf8(s).expect("any bytes make a sequence"))
        .collect()
}

fn pair(a: u8, b: u8, params: &ScoreParams) -> Score {
    if a == b {
        params.match_score as Score
    } else {
        params.mismatch_score as Score
    }
}

/// Classical two-sequence Needleman-Wunsch with a linear gap weight.
pub fn full_nw(s: &[u8], t: &[u8], params: &ScoreParams) -> Score {
    let n = s.len();
    let m = t.len();
    let gap = params.gap_score as Score;
    let mut dp = vec![vec![0 as Score; m + 1]; n + 1];
    for i in 1..=n {
        dp[i][0] = dp[i - 1][0] + gap;
    }
    for j in 1..=m {
        dp[0][j] = dp[0][j - 1] + gap;
    }
    for i in 1..=n {
        for j in 1..=m {
            let diag = dp[i - 1][j - 1] + pair(s[i - 1], t[j - 1], params);
            let up = dp[i - 1][j] + gap;
            let left = dp[i][j - 1] + gap;
            dp[i][j] = diag.max(up).max(left);
        }
    }
    dp[n][m]
}

/// Classical two-sequence Smith-Waterman with a linear gap weight.
pub fn full_sw(s: &[u8], t: &[u8], params: &ScoreParams) -> Score {
    let n = s.len();
    let m = t.len();
    let gap = params.gap_score as Score;
    let mut dp = vec![vec![0 as Score; m + 1]; n + 1];
    let mut best = 0;
    for i in 1..=n {
        for j in 1..=m {
            let diag = dp[i - 1][j - 1] + pair(s[i - 1], t[j - 1], params);
            let up = dp[i - 1][j] + gap;
            let left = dp[i][j - 1] + gap;
            dp[i][j] = diag.max(up).max(left).max(0);
            best = best.max(dp[i][j]);
        }
    }
    best
}

/// The best score of any path between `from` and `to` in the lattice,
/// found by enumerating every path. Only usable on tiny inputs.
pub fn exhaustive_path_score(
    seqs: &[&[u8]],
    from: &[usize],
    to: &[usize],
    params: &ScoreParams,
) -> Score {
    if from == to {
        return 0;
    }

    let n = seqs.len();
    let mut best: Option<Score> = None;

    // every non-empty subset of the dimensions that can still advance
    for consumed in 1u64..(1 << n) {
        let advances = (0..n).all(|d| consumed >> d & 1 == 0 || from[d] < to[d]);
        if !advances {
            continue;
        }

        let column: Vec<Entry> = (0..n)
            .map(|d| {
                if consumed >> d & 1 == 1 {
                    Entry::Symbol(seqs[d][from[d]])
                } else {
                    Entry::Gap
                }
            })
            .collect();

        let next: Vec<usize> = (0..n)
            .map(|d| from[d] + (consumed >> d & 1) as usize)
            .collect();

        let score =
            column_score(&column, params) + exhaustive_path_score(seqs, &next, to, params);
        best = Some(best.map_or(score, |b| b.max(score)));
    }

    best.unwrap_or(0)
}

/// The best global alignment score, by exhaustive path enumeration.
pub fn exhaustive_global(seqs: &[&[u8]], params: &ScoreParams) -> Score {
    let origin = vec![0; seqs.len()];
    let terminal: Vec<usize> = seqs.iter().map(|s| s.len()).collect();
    exhaustive_path_score(seqs, &origin, &terminal, params)
}

/// Every coordinate in the box spanned by `lower..=upper`.
fn lattice_box(lower: &[usize], upper: &[usize]) -> Vec<Vec<usize>> {
    let mut coordinates = vec![vec![]];
    for (&lo, &hi) in lower.iter().zip(upper.iter()) {
        coordinates = coordinates
            .into_iter()
            .flat_map(|prefix| {
                (lo..=hi).map(move |c| {
                    let mut next = prefix.clone();
                    next.push(c);
                    next
                })
            })
            .collect();
    }
    coordinates
}

/// The best local alignment score: the best global score over every choice
/// of substrings, or 0 for the empty alignment.
pub fn exhaustive_local(seqs: &[&[u8]], params: &ScoreParams) -> Score {
    let origin = vec![0; seqs.len()];
    let terminal: Vec<usize> = seqs.iter().map(|s| s.len()).collect();

    let mut best = 0;
    for start in lattice_box(&origin, &terminal) {
        for end in lattice_box(&start, &terminal) {
            best = best.max(exhaustive_path_score(seqs, &start, &end, params));
        }
    }
    best
}

/// Score displayed alignment rows column by column.
pub fn rescore_rows(rows: &[String], params: &ScoreParams) -> Score {
    let rows: Vec<&[u8]> = rows.iter().map(|r| r.as_bytes()).collect();
    let length = rows.first().map_or(0, |r| r.len());
    (0..length)
        .map(|col| {
            let column: Vec<Entry> = rows
                .iter()
                .map(|row| match row[col] {
                    b if b == GAP_MARKER => Entry::Gap,
                    b => Entry::Symbol(b),
                })
                .collect();
            column_score(&column, params)
        })
        .sum()
}

pub fn strip_gaps(row: &str) -> String {
    row.chars().filter(|&c| c != char::from(GAP_MARKER)).collect()
}
