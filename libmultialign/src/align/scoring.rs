use crate::align::structs::{Entry, Score, ScoreParams};

/// Score one pair of column entries.
///
/// The result does not depend on the order of the pair.
#[inline]
pub fn score_pair(a: Entry, b: Entry, params: &ScoreParams) -> Score {
    let weight = match (a, b) {
        (Entry::Gap, Entry::Gap) => params.two_gaps_score,
        (Entry::Gap, Entry::Symbol(_)) | (Entry::Symbol(_), Entry::Gap) => params.gap_score,
        (Entry::Symbol(x), Entry::Symbol(y)) if x == y => params.match_score,
        (Entry::Symbol(_), Entry::Symbol(_)) => params.mismatch_score,
    };
    weight as Score
}

/// Score a column as the sum of its pair scores, counting each unordered pair once.
pub fn column_score(entries: &[Entry], params: &ScoreParams) -> Score {
    entries
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| entries[i + 1..].iter().map(move |&b| (a, b)))
        .map(|(a, b)| score_pair(a, b, params))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::pair_count;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::Gap,
            Entry::Symbol(b'A'),
            Entry::Symbol(b'C'),
            Entry::Symbol(b'G'),
            Entry::Symbol(b'a'),
        ]
    }

    #[test]
    fn test_score_pair() {
        let params = ScoreParams::new(5, -2, -4, 1);
        assert_eq!(score_pair(Entry::Gap, Entry::Gap, &params), 1);
        assert_eq!(score_pair(Entry::Gap, Entry::Symbol(b'A'), &params), -4);
        assert_eq!(score_pair(Entry::Symbol(b'A'), Entry::Symbol(b'A'), &params), 5);
        assert_eq!(score_pair(Entry::Symbol(b'A'), Entry::Symbol(b'C'), &params), -2);
        // symbols are compared exactly
        assert_eq!(score_pair(Entry::Symbol(b'A'), Entry::Symbol(b'a'), &params), -2);
    }

    #[test]
    fn test_score_pair_symmetry() {
        let params = ScoreParams::new(7, -3, -11, 2);
        for &a in entries().iter() {
            for &b in entries().iter() {
                assert_eq!(score_pair(a, b, &params), score_pair(b, a, &params));
            }
        }
    }

    #[test]
    fn test_column_score_counts_each_pair_once() {
        // weights chosen so the total encodes how many pairs of each kind were scored
        let params = ScoreParams::new(1_000_000, 10_000, 100, 1);

        let column = [
            Entry::Symbol(b'A'),
            Entry::Gap,
            Entry::Symbol(b'A'),
            Entry::Symbol(b'C'),
            Entry::Gap,
        ];
        let total = column_score(&column, &params);

        let matches = total / 1_000_000;
        let mismatches = (total / 10_000) % 100;
        let gaps = (total / 100) % 100;
        let two_gaps = total % 100;

        // AA; AC, AC; 3 symbols x 2 gaps; 1 gap pair
        assert_eq!(matches, 1);
        assert_eq!(mismatches, 2);
        assert_eq!(gaps, 6);
        assert_eq!(two_gaps, 1);
        assert_eq!(
            (matches + mismatches + gaps + two_gaps) as usize,
            pair_count(column.len())
        );
    }

    #[test]
    fn test_two_sequence_column() {
        let params = ScoreParams::default();
        assert_eq!(
            column_score(&[Entry::Symbol(b'G'), Entry::Symbol(b'G')], &params),
            5
        );
        assert_eq!(column_score(&[Entry::Symbol(b'G'), Entry::Gap], &params), -4);
        assert_eq!(column_score(&[Entry::Symbol(b'G')], &params), 0);
    }
}
