//! Model adapter: owns the loaded classifier or the reason it is missing.

pub mod adapter;

pub use adapter::ModelAdapter;
