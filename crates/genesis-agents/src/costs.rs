//! Energy cost of each action.
//!
//! The table is fixed: an action is refused outright when the body holds
//! less energy than its cost.

use genesis_types::Action;

/// Return the energy cost for a given action.
///
/// - Jump: 10
/// - `MoveLeft` / `MoveRight`: 2
/// - Stop: 0
/// - Crouch: 1
/// - Wait: 0
/// - `LookAround`: 1
#[allow(clippy::match_same_arms)] // One arm per action keeps the table readable.
pub const fn energy_cost(action: Action) -> f64 {
    match action {
        Action::Jump => 10.0,
        Action::MoveLeft => 2.0,
        Action::MoveRight => 2.0,
        Action::Stop => 0.0,
        Action::Crouch => 1.0,
        Action::Wait => 0.0,
        Action::LookAround => 1.0,
    }
}
