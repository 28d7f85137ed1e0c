//! Marquee
//!
//! Marquee finds the most revenue a box office can take when it must sell an
//! exact number of tickets from a set of price levels, walking down the
//! levels from the highest price and never returning to one it has left.
//!
//! Three solvers are provided: an exhaustive memoised search, a dynamic
//! programming solver that also reports the prices used, and a fast greedy
//! heuristic. Around them sit input validation, timed calculations, history,
//! settings and reporting for the surrounding application.

pub mod analytics;
pub mod calculation;
pub mod constraint;
pub mod history;
pub mod notify;
pub mod prelude;
pub mod prices;
pub mod quota;
pub mod report;
pub mod settings;
pub mod solvers;
pub mod utils;
