mod alignment;
pub use alignment::{GlobalAlignment, LocalAlignment, SCORE_HEADER};

mod alignment_matrix;
pub use alignment_matrix::{AlignmentMatrix, Cell};

mod column;
pub use column::{Column, Entry};

mod config;
pub use config::{EngineConfig, EngineConfigBuilder, Recurrence, Strategy};

mod coordinate;
pub use coordinate::{Coordinate, Odometer, OdometerIter};

mod score_params;
pub use score_params::{Score, ScoreParams};

mod trace;
pub use trace::Trace;
