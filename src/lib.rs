//! Classic algorithm patterns behind the common interview problem families.
//!
//! Each module implements one pattern as a small set of free functions over
//! slices, strings, grids, edge lists and binary trees. Routines are
//! single-threaded and keep all state local to the call. "No answer" outcomes
//! are reported as `None`, an empty collection or `false`; malformed structural
//! input (edge endpoints out of range, ragged grids) is an [`Error`].
//!
//! # Algorithms
//!
//! - **Dynamic programming** ([`climb_stairs`], [`coin_change`], [`rob`],
//!   [`longest_common_subsequence`], [`length_of_lis`]) - rolling and tabulated recurrences
//! - **Flood fill** ([`num_islands`], [`max_area_of_island`]) - BFS and DFS over a [`Grid`]
//! - **Shortest paths** ([`network_delay_time`], [`shortest_distances`]) - Dijkstra with a min-heap
//! - **Union-find** ([`DisjointSet`], [`count_components`]) - path compression and union by rank
//! - **Topological sort** ([`can_finish`], [`topological_order`]) - Kahn's in-degree queue
//! - **Binary trees** ([`max_depth`], [`diameter_of_binary_tree`], [`is_valid_bst`],
//!   [`lowest_common_ancestor`], [`level_order`]) - recursion and BFS over [`TreeNode`]
//! - **Binary search** ([`binary_search`], [`find_first`], [`first_true`],
//!   [`min_feasible`], [`min_eating_speed`], [`search_rotated`]) - on indices and on answers
//! - **Sliding window** ([`max_sum_subarray`], [`length_of_longest_substring`],
//!   [`min_window`]) - fixed and variable windows
//! - **Sorting** ([`merge_sort`], [`merge_sort_count_inversions`], [`quicksort`],
//!   [`quickselect`]) - stable merge and randomised partition
//! - **Top-K** ([`TopK`], [`find_kth_largest`], [`top_k_frequent`]) - heap capped at K
//! - **Two pointers** ([`two_sum_sorted`], [`move_zeroes`], [`three_sum`],
//!   [`valid_palindrome_skip_one`]) - opposite ends and read/write scans

mod binary_search;
mod dp;
mod error;
mod graph;
mod grid;
mod merge_sort;
mod quick_sort;
mod shortest_path;
mod sliding_window;
mod top_k;
mod topo_sort;
mod tree;
mod two_pointers;
mod union_find;

pub use binary_search::*;
pub use dp::*;
pub use error::{Error, Result};
pub use graph::*;
pub use grid::*;
pub use merge_sort::*;
pub use quick_sort::*;
pub use shortest_path::*;
pub use sliding_window::*;
pub use top_k::*;
pub use topo_sort::*;
pub use tree::*;
pub use two_pointers::*;
pub use union_find::*;
