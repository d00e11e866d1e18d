//! Integration tests for liveterm.

mod animation_test;
mod cli_test;
mod helpers;
mod live_region_test;
mod markup_test;
mod prompt_test;
