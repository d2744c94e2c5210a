//! Library signup planning for book scanning.
//!
//! [`planner`] orders libraries for signup, [`simulate`] scores a plan
//! against the deadline and [`io`] reads problems from the input format.

pub mod cache;
pub mod error;
pub mod generate;
pub mod io;
pub mod model;
pub mod planner;
pub mod simulate;

pub use error::{ModelError, ParseError, PlanError};
pub use model::entity::{Book, Days, Id, Library, Points, Score};
pub use model::plan::{OrderedLibraryPlan, Solution};
pub use model::problem::Problem;
pub use planner::{GreedyPlanner, NaivePlanner, Planner, Strategy};
pub use simulate::{simulate, simulate_report, SimulationReport};
