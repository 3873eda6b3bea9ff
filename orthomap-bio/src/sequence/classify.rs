use orthomap_core::SequenceType;

/// Number of non-missing values sampled from a column
pub const SAMPLE_SIZE: usize = 10;

/// Characters counted as nucleotide evidence
pub const NUCLEOTIDE_ALPHABET: [char; 5] = ['A', 'T', 'G', 'C', 'N'];

/// Fraction of nucleotide characters a sample must exceed
pub const NUCLEOTIDE_THRESHOLD: f64 = 0.85;

/// Label a column's content as nucleotide or protein.
///
/// Up to the first [`SAMPLE_SIZE`] non-blank values are concatenated and
/// uppercased. The sample is nucleotide when the share of `A`, `T`, `G`, `C`
/// and `N` characters is strictly greater than [`NUCLEOTIDE_THRESHOLD`].
/// An empty sample is protein.
///
/// Protein samples rich in alanine, threonine, glycine or cysteine can cross
/// the threshold when they are short; that is accepted.
pub fn classify_sequences<'a, I>(values: I) -> SequenceType
where
    I: IntoIterator<Item = &'a str>,
{
    let sample: String = values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .take(SAMPLE_SIZE)
        .collect::<String>()
        .to_uppercase();

    let total = sample.chars().count();
    if total == 0 {
        return SequenceType::Protein;
    }

    let nucleotide = sample
        .chars()
        .filter(|c| NUCLEOTIDE_ALPHABET.contains(c))
        .count();

    if nucleotide as f64 / total as f64 > NUCLEOTIDE_THRESHOLD {
        SequenceType::Nucleotide
    } else {
        SequenceType::Protein
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(&[], SequenceType::Protein)]
    #[case::blank_only(&["", "   "], SequenceType::Protein)]
    #[case::dna(&["ATGGCGTTAGCC", "atgcnnatgc"], SequenceType::Nucleotide)]
    #[case::protein(&["MKTAYIAKQRQISFVKSHFSRQ"], SequenceType::Protein)]
    // 17 of 20 characters: exactly 85%
    #[case::exactly_85(&["AAAAAAAAAAAAAAAAAEEE"], SequenceType::Protein)]
    // 43 of 50 characters: 86%
    #[case::above_85(&["ATGCATGCATGCATGCATGCATGCATGCATGCATGCATGCATGEEEEEEE"], SequenceType::Nucleotide)]
    fn test_classification(#[case] values: &[&str], #[case] expected: SequenceType) {
        assert_eq!(classify_sequences(values.iter().copied()), expected);
    }

    #[test]
    fn test_only_first_ten_values_are_sampled() {
        let mut values = vec!["ATGC"; SAMPLE_SIZE];
        values.extend(std::iter::repeat("MKLVWEFPQ").take(50));
        assert_eq!(classify_sequences(values), SequenceType::Nucleotide);
    }

    #[test]
    fn test_blank_values_do_not_count_toward_sample() {
        let mut values = vec![""; 20];
        values.push("MKLVWEFPQ");
        assert_eq!(classify_sequences(values), SequenceType::Protein);
    }

    #[test]
    fn test_alanine_rich_short_protein_is_known_false_positive() {
        assert_eq!(classify_sequences(["AAAAGGGGTTTTC"]), SequenceType::Nucleotide);
    }
}
