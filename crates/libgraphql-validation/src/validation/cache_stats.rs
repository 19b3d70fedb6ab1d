/// How many times each memo table of a
/// [`ValidationContext`](crate::validation::ValidationContext) has actually
/// computed a value, as opposed to answering from cache.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub fragment_table_builds: usize,
    pub fragment_spreads_computed: usize,
    pub recursively_referenced_fragments_computed: usize,
    pub variable_usages_computed: usize,
    pub recursive_variable_usages_computed: usize,
}
