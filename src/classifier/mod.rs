//! Lexical health-signal classifier: symptom triage and mood detection.
//!
//! Both modes share one engine shape: normalize free text, score it against
//! a curated keyword taxonomy, resolve the winner (with an emergency
//! short-circuit for symptoms), calibrate confidence, and synthesize a
//! recommendation. Deterministic and auditable — a rule engine, not a model.

pub mod types;
pub mod taxonomy;
pub mod normalize;
pub mod score;
pub mod sentiment;
pub mod recommend;
pub mod symptom;
pub mod mood;
pub mod engine;
