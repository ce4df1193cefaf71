//! Append-only JSONL log of evaluated checks.

pub mod jsonl;
