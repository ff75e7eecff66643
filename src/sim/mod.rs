//! Simulation module
//!
//! All gameplay logic lives here:
//! - One step per displayed frame, driven by `tick`
//! - All randomness from the state's seeded RNG
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod input;
pub mod powerups;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use ai::ai_move;
pub use collision::{BallOutcome, Rect, deflection_angle, update_ball};
pub use input::{InputSnapshot, Key};
pub use snapshot::FrameSnapshot;
pub use state::{
    ActivePowerUp, Ball, GameState, Paddle, PowerUp, PowerUpKind, RevertKind, Side,
};
pub use tick::{FrameReport, handle_input, tick};
