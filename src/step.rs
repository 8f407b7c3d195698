/// What a producer context sends its cursor: a value it handed over, or how its run ended.
#[derive(Debug)]
pub(crate) enum Step<Y, D> {
    /// The producer is parked inside `accept` with this value
    Yielded(Y),
    /// The producer returned
    Complete(D),
}
