pub mod structs;

mod cancel;
pub use cancel::CancelToken;

mod moves;
pub use moves::{Move, MoveEnumerator, MAX_SEQUENCES};

mod scoring;
pub use scoring::{column_score, score_pair};

mod needleman_wunsch;
pub use needleman_wunsch::needleman_wunsch;

mod smith_waterman;
pub use smith_waterman::{smith_waterman, LocalBest};

mod wavefront;
pub use wavefront::{wavefront_needleman_wunsch, wavefront_smith_waterman};

mod traceback;
pub use traceback::{traceback_global, traceback_local};

mod engine;
pub use engine::{Engine, Solution};
