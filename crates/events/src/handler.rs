use shopfront_core::Aggregate;

/// Execute an aggregate command deterministically (no IO, no async).
///
/// The canonical reducer lifecycle in one step:
///
/// 1. **Decide**: `aggregate.handle(command)` returns events (pure, no mutation)
/// 2. **Evolve**: each event is applied via `aggregate.apply(event)`
///
/// A command that decides to do nothing returns an empty event list and the
/// aggregate is left untouched. The emitted events are returned so callers
/// can notify subscribers once the state is fully applied.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}
