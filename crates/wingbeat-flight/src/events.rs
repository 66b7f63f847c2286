use serde::{Deserialize, Serialize};

use crate::collectibles::CoinKind;
use crate::powerups::PowerUpKind;

/// Fire-and-forget notifications emitted by a session tick for the
/// render/audio/achievement/analytics collaborators. The core never blocks
/// on, or hears back from, their handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// An obstacle was cleared. `score` is the run score after the award.
    Scored { points: u32, score: u32 },
    /// A coin was picked up and credited to the store.
    CoinCollected { kind: CoinKind, value: u32 },
    /// A timed power-up was activated or refreshed.
    PowerUpActivated { kind: PowerUpKind },
    /// An ExtraLife pickup landed while lives were already at max.
    ExtraLifeBanked,
    /// A life was lost; the run continues. `saved_life_used` marks the
    /// special came-back-from-zero cue.
    LifeLost { remaining: i32, saved_life_used: bool },
    /// The run is over; `final_score` is frozen for display/persistence.
    GameOver { final_score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_for_collaborators() {
        let events = vec![
            SessionEvent::Scored { points: 2, score: 14 },
            SessionEvent::CoinCollected {
                kind: CoinKind::Diamond,
                value: 5,
            },
            SessionEvent::PowerUpActivated {
                kind: PowerUpKind::Magnet,
            },
            SessionEvent::ExtraLifeBanked,
            SessionEvent::LifeLost {
                remaining: 1,
                saved_life_used: true,
            },
            SessionEvent::GameOver { final_score: 87 },
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<SessionEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events);
    }
}
