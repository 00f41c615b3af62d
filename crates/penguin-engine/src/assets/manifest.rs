use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::extensions::easing::Easing;
use crate::extensions::sequence::Sequence;
use crate::extensions::tween::{Animate, Tween};

/// Animation manifest describing named tweens and sequences for a game.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationManifest {
    /// Named tween lookup.
    #[serde(default)]
    pub tweens: BTreeMap<String, TweenDescriptor>,
    /// Named sequence lookup.
    #[serde(default)]
    pub sequences: BTreeMap<String, SequenceDescriptor>,
}

/// Describes a single float tween.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenDescriptor {
    /// Diagnostic label (default: the manifest key).
    #[serde(default)]
    pub id: Option<String>,
    /// Seconds at speed 1.
    pub duration: f32,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_speed")]
    pub speed: f32,
    pub value: ValueDescriptor,
}

/// What a tween outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueDescriptor {
    /// Interpolate between two floats.
    FromTo { from: f32, to: f32 },
    /// Read out elapsed seconds.
    Wait,
}

/// Describes a sequence of tweens played back to back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceDescriptor {
    /// Diagnostic label (default: the manifest key).
    #[serde(default)]
    pub id: Option<String>,
    /// Shared speed, overriding each element's own (default: 1).
    #[serde(default = "default_speed")]
    pub speed: f32,
    pub elements: Vec<TweenDescriptor>,
}

fn default_speed() -> f32 {
    1.0
}

fn finite(id: &str, field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite {
            id: id.to_string(),
            field,
            value,
        })
    }
}

impl TweenDescriptor {
    fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.id.as_deref().unwrap_or(key)
    }

    fn validate(&self, key: &str) -> Result<(), ConfigError> {
        let id = self.label(key);
        if id.is_empty() {
            return Err(ConfigError::EmptyId);
        }
        finite(id, "duration", self.duration)?;
        finite(id, "speed", self.speed)?;
        if self.duration < 0.0 {
            return Err(ConfigError::NegativeDuration {
                id: id.to_string(),
                duration: self.duration,
            });
        }
        if self.speed < 0.0 {
            return Err(ConfigError::NegativeSpeed {
                id: id.to_string(),
                speed: self.speed,
            });
        }
        Ok(())
    }

    fn build(&self, key: &str) -> Box<dyn Animate<f32>> {
        let id = self.label(key).to_string();
        match self.value {
            ValueDescriptor::FromTo { from, to } => Box::new(
                Tween::from_to(from, to, self.duration, self.easing)
                    .with_id(id)
                    .with_speed(self.speed),
            ),
            ValueDescriptor::Wait => {
                let mut wait = Tween::wait(self.duration).with_id(id).with_speed(self.speed);
                wait.easing = self.easing;
                Box::new(wait)
            }
        }
    }
}

impl SequenceDescriptor {
    fn validate(&self, key: &str) -> Result<(), ConfigError> {
        let id = self.id.as_deref().unwrap_or(key);
        if id.is_empty() {
            return Err(ConfigError::EmptyId);
        }
        finite(id, "speed", self.speed)?;
        if self.speed < 0.0 {
            return Err(ConfigError::NegativeSpeed {
                id: id.to_string(),
                speed: self.speed,
            });
        }
        for (i, element) in self.elements.iter().enumerate() {
            element.validate(&format!("{}[{}]", id, i))?;
        }
        Ok(())
    }
}

impl AnimationManifest {
    /// Parse a manifest from a JSON string. Does not validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every descriptor, returning the first problem found.
    /// Tweens are checked before sequences, each in key order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, tween) in &self.tweens {
            tween.validate(key).inspect_err(|e| log::warn!("tween '{}': {}", key, e))?;
        }
        for (key, sequence) in &self.sequences {
            sequence
                .validate(key)
                .inspect_err(|e| log::warn!("sequence '{}': {}", key, e))?;
        }
        Ok(())
    }

    /// Build the named tween at progress 0.
    pub fn build_tween(&self, name: &str) -> Result<Box<dyn Animate<f32>>, ConfigError> {
        let desc = self
            .tweens
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTween(name.to_string()))?;
        desc.validate(name)?;
        Ok(desc.build(name))
    }

    /// Build the named sequence, restarted and ready to tick.
    pub fn build_sequence(&self, name: &str) -> Result<Sequence<f32>, ConfigError> {
        let desc = self
            .sequences
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSequence(name.to_string()))?;
        desc.validate(name)?;

        let id = desc.id.as_deref().unwrap_or(name);
        let elements = desc
            .elements
            .iter()
            .enumerate()
            .map(|(i, element)| element.build(&format!("{}[{}]", id, i)))
            .collect();

        Ok(Sequence::from_elements(elements)
            .with_id(id)
            .with_speed(desc.speed))
    }
}
