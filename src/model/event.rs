use serde::{Deserialize, Serialize};

/// Record of one resolved fight: the city that was levelled and every alien
/// that died with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destruction {
    /// Round the fight happened in (1-based).
    pub round: u64,
    pub city: String,
    /// Names of the aliens involved, in id order.
    pub aliens: Vec<String>,
}

impl Destruction {
    /// Human-readable fight report. Two combatants are named individually;
    /// three or more render as a comma-separated list.
    pub fn describe(&self) -> String {
        match self.aliens.as_slice() {
            [a, b] => format!("City {} destroyed by alien {a} and alien {b}", self.city),
            _ => format!(
                "City {} destroyed by aliens: {}",
                self.city,
                self.aliens.join(", ")
            ),
        }
    }
}

/// Accumulates destruction events over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub destructions: Vec<Destruction>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: Destruction) {
        self.destructions.push(event);
    }
}
