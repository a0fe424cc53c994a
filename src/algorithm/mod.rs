//! Instrumented sorting algorithms and the executor that drives them

/// Bubble sort with a shrinking upper bound
pub mod bubble;
/// Algorithm selection, run state tracking and step statistics
pub mod executor;
/// Insertion sort with backward shifting
pub mod insertion;
/// Top-down merge sort with per-merge temporaries
pub mod merge;
/// Lomuto-partition quick sort
pub mod quick;
/// Selection sort scanning for the minimum
pub mod selection;
/// Shell sort with a halving gap sequence
pub mod shell;
