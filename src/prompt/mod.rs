mod instructions;

pub use instructions::{build_prompt, parse_schedule_reply};
