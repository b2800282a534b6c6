pub mod engine;
pub mod planner;

pub use engine::DispatchEngine;
pub use engine::Phase;
pub use planner::plan_route;
pub use planner::VisitPlan;
