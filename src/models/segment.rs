// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interval workout segments and the modifier state machine.
//!
//! A segment is one line of a structured workout: a primary value/unit
//! pair, optionally qualified by a second pair ("400 meters at 7:30
//! pace", "3 sets of 12 reps"). Which edits are legal depends entirely
//! on the units currently assigned to the two slots:
//! - sets pair only with reps,
//! - durations and distances pair with exactly one rate,
//! - reps and bare rates take no qualifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Unit kind carried by one slot of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalUnit {
    NotSet,
    Sets,
    Reps,
    Seconds,
    Meters,
    Kilometers,
    Feet,
    Yards,
    Miles,
    PaceImperial,
    PaceMetric,
    SpeedImperial,
    SpeedMetric,
    Watts,
}

impl IntervalUnit {
    /// Duration and distance kinds: the primary quantities a workout
    /// segment is measured in.
    pub fn is_quantitative(self) -> bool {
        matches!(
            self,
            IntervalUnit::Seconds
                | IntervalUnit::Meters
                | IntervalUnit::Kilometers
                | IntervalUnit::Feet
                | IntervalUnit::Yards
                | IntervalUnit::Miles
        )
    }

    /// Pace, speed, and power kinds: the qualifiers a quantitative
    /// segment can carry.
    pub fn is_rate(self) -> bool {
        matches!(
            self,
            IntervalUnit::PaceImperial
                | IntervalUnit::PaceMetric
                | IntervalUnit::SpeedImperial
                | IntervalUnit::SpeedMetric
                | IntervalUnit::Watts
        )
    }

    /// Display label used by segment descriptions.
    pub fn label(self) -> &'static str {
        match self {
            IntervalUnit::NotSet => "",
            IntervalUnit::Sets => "sets",
            IntervalUnit::Reps => "repetitions",
            IntervalUnit::Seconds => "seconds",
            IntervalUnit::Meters => "meters",
            IntervalUnit::Kilometers => "kms",
            IntervalUnit::Feet => "feet",
            IntervalUnit::Yards => "yards",
            IntervalUnit::Miles => "miles",
            IntervalUnit::PaceImperial => "min/mile",
            IntervalUnit::PaceMetric => "min/km",
            IntervalUnit::SpeedImperial => "mph",
            IntervalUnit::SpeedMetric => "kph",
            IntervalUnit::Watts => "watts",
        }
    }

    /// Noun used when naming a modifier for this kind ("Add Duration
    /// (seconds)", "Edit Pace (mins/mile)", ...).
    fn modifier_noun(self) -> &'static str {
        match self {
            IntervalUnit::NotSet => "",
            IntervalUnit::Sets => "Sets",
            IntervalUnit::Reps => "Reps",
            IntervalUnit::Seconds => "Duration (seconds)",
            IntervalUnit::Meters => "Distance (meters)",
            IntervalUnit::Kilometers => "Distance (kilometers)",
            IntervalUnit::Feet => "Distance (feet)",
            IntervalUnit::Yards => "Distance (yards)",
            IntervalUnit::Miles => "Distance (miles)",
            IntervalUnit::PaceImperial => "Pace (mins/mile)",
            IntervalUnit::PaceMetric => "Pace (mins/km)",
            IntervalUnit::SpeedImperial => "Speed (mph)",
            IntervalUnit::SpeedMetric => "Speed (kph)",
            IntervalUnit::Watts => "Power (watts)",
        }
    }
}

/// A named edit operation on a segment, legal only in certain states.
///
/// `Add` attaches a new qualifier pair of the given kind; `Edit`
/// overwrites the value of whichever slot already holds the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentModifier {
    Add(IntervalUnit),
    Edit(IntervalUnit),
}

impl fmt::Display for SegmentModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentModifier::Add(kind) => write!(f, "Add {}", kind.modifier_noun()),
            SegmentModifier::Edit(kind) => write!(f, "Edit {}", kind.modifier_noun()),
        }
    }
}

/// One line of a structured interval workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalSegment {
    /// Identity for list diffing; carries no workout meaning
    pub id: Uuid,
    pub first_value: f64,
    pub second_value: f64,
    /// Units for the primary part of the description (X secs at Y pace,
    /// X sets of Y reps)
    pub first_units: IntervalUnit,
    /// Units for the qualifying second part, if any
    pub second_units: IntervalUnit,
}

impl Default for IntervalSegment {
    fn default() -> Self {
        Self::new()
    }
}

// Segment identity is the id alone, so list diffing survives edits.
impl PartialEq for IntervalSegment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for IntervalSegment {}

impl Hash for IntervalSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl IntervalSegment {
    /// A fresh segment with no units assigned.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            first_value: 0.0,
            second_value: 0.0,
            first_units: IntervalUnit::NotSet,
            second_units: IntervalUnit::NotSet,
        }
    }

    /// The modifiers that are legal for the segment's current state.
    ///
    /// `_activity_type` is accepted for signature parity with the
    /// editing views; the current rules are sport-independent.
    pub fn legal_modifiers(&self, _activity_type: &str) -> Vec<SegmentModifier> {
        use IntervalUnit::*;

        let mut modifiers = Vec::new();
        match self.first_units {
            NotSet => {
                // Entry points for a fresh segment: a quantity or sets.
                for kind in [Seconds, Meters, Kilometers, Feet, Yards, Miles, Sets] {
                    modifiers.push(SegmentModifier::Add(kind));
                }
            }
            Sets => {
                modifiers.push(SegmentModifier::Edit(Sets));
                if self.second_units == NotSet {
                    modifiers.push(SegmentModifier::Add(Reps));
                }
            }
            Reps => {
                modifiers.push(SegmentModifier::Edit(Reps));
            }
            kind if kind.is_quantitative() => {
                modifiers.push(SegmentModifier::Edit(kind));
                if self.second_units == NotSet {
                    for rate in [PaceImperial, PaceMetric, SpeedImperial, SpeedMetric, Watts] {
                        modifiers.push(SegmentModifier::Add(rate));
                    }
                }
            }
            // Rate-only segments are editable but take no qualifier.
            kind => {
                modifiers.push(SegmentModifier::Edit(kind));
            }
        }
        modifiers
    }

    /// Apply a modifier to the segment.
    ///
    /// `Add` establishes the qualifier slot; `Edit` overwrites whichever
    /// slot holds the kind, preferring the primary slot. Modifiers for
    /// `NotSet` do nothing.
    pub fn apply(&mut self, modifier: SegmentModifier, value: f64) {
        match modifier {
            SegmentModifier::Add(IntervalUnit::NotSet)
            | SegmentModifier::Edit(IntervalUnit::NotSet) => {}
            SegmentModifier::Add(kind) => {
                self.second_value = value;
                self.second_units = kind;
            }
            SegmentModifier::Edit(kind) => {
                if self.first_units == kind {
                    self.first_value = value;
                } else {
                    self.second_value = value;
                }
            }
        }
    }

    /// Set the primary slot when building a fresh segment.
    ///
    /// Once assigned, the primary unit kind is never changed or cleared
    /// by editing; a mismatched kind is ignored.
    pub fn assign_primary(&mut self, units: IntervalUnit, value: f64) {
        if units == IntervalUnit::NotSet {
            return;
        }
        if self.first_units == IntervalUnit::NotSet || self.first_units == units {
            self.first_units = units;
            self.first_value = value;
        }
    }

    /// Human-readable one-line description, empty until the primary slot
    /// is assigned.
    pub fn describe(&self) -> String {
        if self.first_units == IntervalUnit::NotSet {
            return String::new();
        }

        let mut description = format_fragment(self.first_value, self.first_units);
        if self.second_units != IntervalUnit::NotSet {
            if self.second_units.is_rate() {
                description.push_str(" at ");
            } else if self.second_units == IntervalUnit::Reps {
                description.push_str(" of ");
            } else {
                description.push(' ');
            }
            description.push_str(&format_fragment(self.second_value, self.second_units));
        }
        description
    }
}

fn format_fragment(value: f64, units: IntervalUnit) -> String {
    format!("{:.1} {}", value, units.label())
}
