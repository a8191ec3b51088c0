use serde::{Deserialize, Serialize};
use wayfare_shared::DestinationKind;

/// A unit of the planning wizard's branching sequence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Parameters,
    Flight,
    Cities,
    Itinerary,
}

impl StepId {
    /// Display title, as shown on the planning timeline
    pub fn title(&self) -> &'static str {
        match self {
            StepId::Parameters => "Trip Parameters",
            StepId::Flight => "Flight Selection",
            StepId::Cities => "City Selection",
            StepId::Itinerary => "Generated Itinerary",
        }
    }
}

/// The ordered steps that apply to a trip. Two conditions shape the
/// sequence: the flight step exists only when a flight is wanted, and the
/// city step exists only for country-level destinations (single-city
/// trips plan the whole destination at once).
pub fn visible_steps(destination_kind: DestinationKind, needs_flight: bool) -> Vec<StepId> {
    let mut steps = vec![StepId::Parameters];

    if needs_flight {
        steps.push(StepId::Flight);
    }

    if destination_kind == DestinationKind::Country {
        steps.push(StepId::Cities);
    }

    steps.push(StepId::Itinerary);
    steps
}

/// 1-based position of a step within a visible sequence. Ordinals are
/// dynamic: skipping the flight step shifts every later ordinal down.
pub fn ordinal_of(steps: &[StepId], step: StepId) -> Option<usize> {
    steps.iter().position(|s| *s == step).map(|index| index + 1)
}

/// The step that follows `step` in the visible sequence, if any
pub fn next_after(steps: &[StepId], step: StepId) -> Option<StepId> {
    let position = steps.iter().position(|s| *s == step)?;
    steps.get(position + 1).copied()
}
