//! Agent-versus-agent play: single matches and alternating-colour series.

mod play;
mod series;

pub use play::{play_match, MatchResult};
pub use series::{run_series, SeriesResult};
