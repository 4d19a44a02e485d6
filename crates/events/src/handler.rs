/// Execute an aggregate command deterministically (no IO, no async).
///
/// The canonical lifecycle in one step:
///
/// 1. **Decide**: calls `aggregate.handle(command)` to get events (pure,
///    no mutation)
/// 2. **Evolve**: applies each event to the aggregate via
///    `aggregate.apply(event)`
///
/// The aggregate maintains its own version tracking during `apply()` (+1 per
/// event). On error, no events are applied and the aggregate is unchanged.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: savora_core::Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}
