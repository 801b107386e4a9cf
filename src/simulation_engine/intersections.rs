use serde::{Deserialize, Serialize};

/// Position on the dashboard map, in percent of the grid extent on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Possible states of a traffic light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    Green,
    Yellow,
    Red,
}

impl LightState {
    /// Fixed cycle order: green, yellow, red.
    pub const CYCLE: [LightState; 3] = [LightState::Green, LightState::Yellow, LightState::Red];

    pub fn next(self) -> Self {
        match self {
            LightState::Green => LightState::Yellow,
            LightState::Yellow => LightState::Red,
            LightState::Red => LightState::Green,
        }
    }

    pub fn cycle_index(self) -> usize {
        match self {
            LightState::Green => 0,
            LightState::Yellow => 1,
            LightState::Red => 2,
        }
    }
}

/// Static congestion classification attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Low,
    Medium,
    High,
}

/// A signalised intersection on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalNode {
    pub id: String,
    /// Street-corner label shown in the detail view.
    pub location: String,
    pub position: Position,
    pub light_state: LightState,
    pub density: Density,
}

impl SignalNode {
    pub fn new(
        id: &str,
        location: &str,
        x: f64,
        y: f64,
        light_state: LightState,
        density: Density,
    ) -> Self {
        Self {
            id: id.to_string(),
            location: location.to_string(),
            position: Position::new(x, y),
            light_state,
            density,
        }
    }

    /// Returns this signal advanced by one step of the light cycle.
    pub fn transitioned(&self) -> Self {
        Self {
            light_state: self.light_state.next(),
            ..self.clone()
        }
    }
}

pub fn create_signals() -> Vec<SignalNode> {
    vec![
        SignalNode::new(
            "signal-1",
            "Main St & 5th Ave",
            25.0,
            20.0,
            LightState::Green,
            Density::Medium,
        ),
        SignalNode::new(
            "signal-2",
            "Central Blvd & Oak",
            65.0,
            35.0,
            LightState::Red,
            Density::High,
        ),
        SignalNode::new(
            "signal-3",
            "Park Ave & Elm",
            45.0,
            60.0,
            LightState::Yellow,
            Density::Low,
        ),
        SignalNode::new(
            "signal-4",
            "1st St & Pine",
            75.0,
            75.0,
            LightState::Green,
            Density::Medium,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_is_green_yellow_red() {
        let mut state = LightState::Green;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(state);
            state = state.next();
        }
        assert_eq!(
            seen,
            vec![
                LightState::Green,
                LightState::Yellow,
                LightState::Red,
                LightState::Green,
                LightState::Yellow,
                LightState::Red,
            ]
        );
    }

    #[test]
    fn cycle_index_matches_cycle_table() {
        for (idx, state) in LightState::CYCLE.iter().enumerate() {
            assert_eq!(state.cycle_index(), idx);
        }
    }

    #[test]
    fn transition_keeps_everything_but_the_light() {
        let signal = create_signals().remove(1);
        let next = signal.transitioned();
        assert_eq!(next.light_state, LightState::Green);
        assert_eq!(next.id, signal.id);
        assert_eq!(next.position, signal.position);
        assert_eq!(next.density, signal.density);
    }
}
