//! Core conversion building blocks: numeral decoding, arithmetic, English
//! spelling, and the per-line pipeline that ties them together. These are
//! consumed by the batch driver in the `api` module.
pub mod arith;
pub mod line;
pub mod numeral;
pub mod params;
pub mod words;
