use crate::shared::Building;

/// Floor numbers the car will stop at during one run, ascending and
/// without duplicates.
pub type VisitPlan = Vec<u8>;

/// Sweeps the floors bottom to top and collects every floor with waiting
/// passengers together with each waiter's destination, then sorts and
/// deduplicates. The plan does not depend on where the car currently is:
/// the whole building is served in ascending order every run.
pub fn plan_route(building: &Building) -> VisitPlan {
    let mut plan: VisitPlan = Vec::new();

    for floor in building.floors() {
        if floor.waiting.is_empty() {
            continue;
        }
        plan.push(floor.number);
        for passenger in &floor.waiting {
            plan.push(passenger.destination);
        }
    }

    plan.sort_unstable();
    plan.dedup();
    plan
}
