//! `wd-survey` — where candidate networks come from.
//!
//! The planner does not care whether candidates arrive from a live discovery
//! API or a file on disk; it sees a filtered `Vec<TargetPoint>`.  This crate
//! owns that boundary:
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`query`]  | `SurveyQuery`, `EncryptionFilter` — the candidate filter  |
//! | [`source`] | `CandidateSource` trait                                   |
//! | [`csv`]    | `CsvSource` — reads survey-export CSV files               |
//! | [`error`]  | `SurveyError`, `SurveyResult<T>`                          |
//!
//! A live Wigle-style HTTP client would be another `CandidateSource`
//! implementation; it is deliberately not part of this workspace.

pub mod csv;
pub mod error;
pub mod query;
pub mod source;


pub use self::csv::{CsvSource, read_candidates};
pub use error::{SurveyError, SurveyResult};
pub use query::{EncryptionFilter, SurveyQuery};
pub use source::CandidateSource;
