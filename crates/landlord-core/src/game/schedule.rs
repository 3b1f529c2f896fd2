use crate::model::seat::Seat;

/// Work the engine wants run later by whoever drives it. Tasks are tagged
/// with the generation they were issued for; the engine bumps its
/// generation on every reset, phase entry and turn advance, so a task that
/// outlives its turn simply fails the currency check instead of racing a
/// cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub generation: u64,
    /// Ticks the driver should wait before executing; purely cosmetic
    /// pacing so bot turns stay humanly legible.
    pub delay_ticks: u8,
    pub action: TaskAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// Ask the bot seated here for a decision and feed it back through the
    /// regular intent entry points.
    BotTurn(Seat),
}
