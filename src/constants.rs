/// Constants used by the sorting engine.
pub mod sort {
    /// Chains at or below this length sort sequentially inside
    /// `par_merge_sort`.
    ///
    /// Below this size the cost of scheduling a rayon task outweighs the
    /// split-and-merge work for the half.
    pub const PARALLEL_CUTOFF: usize = 64;
}

/// Constants used by the bundled population demo.
pub mod demo {
    /// Heading printed before the unsorted listing.
    pub const UNSORTED_HEADING: &str = "The unsorted list of countries by population is:";
    /// Heading printed before the sorted listing.
    pub const SORTED_HEADING: &str =
        "The sorted list of countries by population in decreasing order is:";
}
