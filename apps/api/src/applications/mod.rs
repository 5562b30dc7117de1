// Job application tracking: create, fetch, and store extracted requirements.
// Extraction itself (scraping / LLM) happens upstream; this API only stores the result.

pub mod handlers;
