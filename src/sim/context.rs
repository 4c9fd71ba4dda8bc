/// Per-day values every slot of that day shares.
///
/// Computed once by the day scheduler so the event generator never has to
/// reach back into pacing state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotContext {
    pub day: u32,
    /// Probability of the lethal branch, already scaled by death pressure
    /// and clamped.
    pub lethal_chance: f64,
}
