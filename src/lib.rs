//! sitestamp - stamps construction-site photos with a five-row caption
//! table (공사명 / 위치 / 날짜 / 공종 / 내용) rendered bottom-right.
//!
//! The `overlay` module is the core: a pure compositing pass that measures
//! text through a pluggable backend, lays the table out against the photo
//! dimensions and rasterizes it onto a copy of the image. `app` wraps it
//! with session state, export rules and the command-line front end.

pub mod app;
pub mod input;
pub mod overlay;
pub mod rendering;
