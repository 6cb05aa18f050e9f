//! Whole sessions, batch and interactive.

mod batch;
mod interactive;
