/// Delimiters considered when sniffing, in tie-break order
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Pick the delimiter of a delimited-text sample.
///
/// A candidate is preferred when it occurs the same number of times on every
/// sampled line; among those the one with the most occurrences in the header
/// wins. Falls back to the most frequent candidate in the header, then `,`.
pub fn sniff_delimiter(sample: &str) -> u8 {
    let lines: Vec<&str> = sample.lines().filter(|l| !l.trim().is_empty()).collect();
    let Some(&header) = lines.first() else {
        return b',';
    };

    let count = |line: &str, d: u8| line.bytes().filter(|&b| b == d).count();

    let consistent = CANDIDATE_DELIMITERS
        .iter()
        .copied()
        .filter(|&d| {
            let n = count(header, d);
            n > 0 && lines.iter().all(|&l| count(l, d) == n)
        })
        .fold(None, |best: Option<(u8, usize)>, d| {
            let n = count(header, d);
            match best {
                Some((_, m)) if m >= n => best,
                _ => Some((d, n)),
            }
        });
    if let Some((d, _)) = consistent {
        return d;
    }

    CANDIDATE_DELIMITERS
        .iter()
        .copied()
        .fold((b',', 0), |(best, m), d| {
            let n = count(header, d);
            if n > m { (d, n) } else { (best, m) }
        })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::csv("id,seq,name\nP1,MKT,a\n", b',')]
    #[case::tsv("id\tseq\tname\nP1\tMKT\tkinase, putative\n", b'\t')]
    #[case::semicolon("id;seq\nP1;MKT\n", b';')]
    #[case::pipe("id|seq\nP1|MKT\n", b'|')]
    #[case::single_column("id\nP1\n", b',')]
    #[case::empty("", b',')]
    fn test_sniff(#[case] sample: &str, #[case] expected: u8) {
        assert_eq!(sniff_delimiter(sample), expected);
    }

    #[test]
    fn test_inconsistent_counts_fall_back_to_header_majority() {
        // Commas inside the description break consistency; tabs stay consistent
        let sample = "id\tdesc\tseq\nP1\tkinase, putative, fragment\tMKT\n";
        assert_eq!(sniff_delimiter(sample), b'\t');

        let ragged = "a;b;c\nx;y\n";
        assert_eq!(sniff_delimiter(ragged), b';');
    }
}
