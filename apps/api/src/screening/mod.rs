//! Screening pipeline: candidate corpus assembly, prompt construction, and
//! the HTTP handlers that drive extraction and the completion call.

pub mod assembler;
pub mod corpus;
pub mod handlers;
pub mod prompts;
