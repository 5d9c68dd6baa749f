pub mod jsonl;

pub use jsonl::flush_events_to_jsonl;
