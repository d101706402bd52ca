// Resume scoring: deterministic keyword, section and formatting analysis of
// resume text against a role profile. No I/O below `handlers`.

pub mod engine;
pub mod formatting;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod sections;
