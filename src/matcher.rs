use crate::dict::WordCorpus;

/// Every word of `corpus` that starts with `query`, in corpus order.
///
/// An empty query matches nothing rather than everything, so the first frame
/// doesn't list the whole dictionary.
pub fn prefixed<'c>(corpus: &'c WordCorpus, query: &str) -> Vec<&'c str> {
	if query.is_empty() {
		return Vec::new();
	}

	corpus
		.iter()
		.filter(|word| word.as_bytes().starts_with(query.as_bytes()))
		.collect()
}
