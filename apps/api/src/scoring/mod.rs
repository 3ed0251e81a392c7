// ATS scoring engine.
// The engine itself (engine, keywords, formatting) is pure and synchronous:
// no I/O, no caching, no shared state. Handlers are the only async code here.

pub mod engine;
pub mod formatting;
pub mod handlers;
pub mod keywords;
