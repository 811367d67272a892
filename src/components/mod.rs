pub mod digraph;
