use cnvcheck_core::models::Band;

///
/// Bin edges of one chromosome: the band starts, closed by an implicit
/// `+inf` edge after the last start.
///
/// Bin `i` covers `[starts[i], starts[i + 1])`, and the last bin is open
/// to the right. Positions left of the first start fall in no bin.
///
#[derive(Debug, Clone)]
pub struct ChromBins<'a> {
    starts: Vec<u64>,
    labels: Vec<&'a str>,
}

impl<'a> ChromBins<'a> {
    ///
    /// Build the bins from a start-ordered band list.
    ///
    pub fn from_bands(bands: &'a [Band]) -> Self {
        let (starts, labels) = bands.iter().map(|b| (b.start, b.label.as_str())).unzip();
        ChromBins { starts, labels }
    }

    ///
    /// Index of the bin containing `position`, if any.
    ///
    #[inline]
    pub fn bin_index(&self, position: u64) -> Option<usize> {
        match upper_bound(&position, &self.starts) {
            0 => None,
            n => Some(n - 1),
        }
    }

    ///
    /// Label of the bin containing `position`, if any.
    ///
    #[inline]
    pub fn bin_label(&self, position: u64) -> Option<&'a str> {
        self.bin_index(position).map(|i| self.labels[i])
    }

    /// Lowest position that lands in a bin.
    pub fn first_start(&self) -> Option<u64> {
        self.starts.first().copied()
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

///
/// Number of elements of a sorted slice that are `<= key`, i.e. the index of
/// the first element strictly greater than `key`.
///
/// # Returns
///
/// - `0` if every element is greater than `key` (or the slice is empty)
/// - `elems.len()` if no element is greater than `key`
/// - Otherwise, the first index where `elems[index] > key`
#[inline]
pub fn upper_bound<K>(key: &K, elems: &[K]) -> usize
where
    K: PartialOrd,
{
    if elems.is_empty() || elems[0] > *key {
        return 0;
    } else if elems[elems.len() - 1] <= *key {
        return elems.len();
    }

    let mut cursor = 0;
    let mut length = elems.len();
    while length > 1 {
        let half = length >> 1;
        length -= half;
        cursor += (usize::from(elems[cursor + half - 1] <= *key)) * half;
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    use cnvcheck_core::models::ChromosomeOrdinal;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn band(start: u64, label: &str) -> Band {
        Band {
            ordinal: ChromosomeOrdinal(1),
            start,
            end: 0,
            label: label.to_string(),
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(5, 0)]
    #[case(10, 1)]
    #[case(15, 1)]
    #[case(20, 3)]
    #[case(25, 3)]
    #[case(30, 4)]
    #[case(45, 5)]
    #[case(50, 6)]
    #[case(99, 6)]
    fn test_upper_bound(#[case] key: u64, #[case] expected: usize) {
        let elems = [10, 20, 20, 30, 40, 50];
        assert_eq!(upper_bound(&key, &elems), expected);
    }

    #[rstest]
    fn test_upper_bound_agrees_with_linear_scan() {
        let elems: Vec<u64> = (0..97).map(|x| x * 7 + (x % 3)).collect();
        for key in 0..700u64 {
            let expected = elems.iter().filter(|e| **e <= key).count();
            assert_eq!(upper_bound(&key, &elems), expected, "key {}", key);
        }
    }

    #[rstest]
    fn test_upper_bound_empty() {
        let elems: [u64; 0] = [];
        assert_eq!(upper_bound(&3, &elems), 0);
    }

    #[rstest]
    fn test_bins_are_half_open() {
        let bands = vec![band(0, "p1"), band(1500, "p2")];
        let bins = ChromBins::from_bands(&bands);

        let labels: Vec<Option<&str>> = [1000, 1499, 1500, 2000, 3000]
            .iter()
            .map(|p| bins.bin_label(*p))
            .collect();
        assert_eq!(
            labels,
            vec![Some("p1"), Some("p1"), Some("p2"), Some("p2"), Some("p2")]
        );
    }

    #[rstest]
    fn test_position_before_first_start() {
        let bands = vec![band(100, "p1"), band(200, "p2")];
        let bins = ChromBins::from_bands(&bands);

        assert_eq!(bins.bin_label(99), None);
        assert_eq!(bins.bin_label(100), Some("p1"));
        assert_eq!(bins.first_start(), Some(100));
    }

    #[rstest]
    fn test_last_bin_is_unbounded() {
        let bands = vec![band(0, "q1")];
        let bins = ChromBins::from_bands(&bands);
        assert_eq!(bins.bin_label(u64::MAX), Some("q1"));
    }

    #[rstest]
    fn test_empty_bins() {
        let bins = ChromBins::from_bands(&[]);
        assert!(bins.is_empty());
        assert_eq!(bins.bin_index(0), None);
    }
}
