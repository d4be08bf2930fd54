//! Emotion derivation from two colors.
//!
//! Two hex colors are combined channel by channel with a named integer
//! operator, the three results are summed, and the sum modulo the table
//! length selects an [`Emotion`].
//!
//! ```text
//! op, c1, c2
//!   ↓  Operator::from_str, codec::parse
//! Rgb, Rgb
//!   ↓  blend (i32, no 8-bit truncation)
//! Blend { red, blue, green }
//!   ↓  sum % 7, IndexPolicy
//! Emotion
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec::{self, Rgb};
use super::error::ColorError;

// ---------------------------------------------------------------------------
// Emotion table
// ---------------------------------------------------------------------------

/// The fixed output alphabet of the derivation, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Love,
    Compassion,
    Hope,
    Willpower,
    Fear,
    Greed,
    Rage,
}

impl Emotion {
    /// All emotions, indexed by table position.
    pub const ALL: [Emotion; 7] = [
        Emotion::Love,
        Emotion::Compassion,
        Emotion::Hope,
        Emotion::Willpower,
        Emotion::Fear,
        Emotion::Greed,
        Emotion::Rage,
    ];

    /// Look up the emotion at a table position.
    pub fn from_index(index: usize) -> Option<Emotion> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Love => "love",
            Emotion::Compassion => "compassion",
            Emotion::Hope => "hope",
            Emotion::Willpower => "willpower",
            Emotion::Fear => "fear",
            Emotion::Greed => "greed",
            Emotion::Rage => "rage",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// Binary integer operators available to the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
        }
    }

    /// Apply the operator to two integers.
    ///
    /// Arithmetic wraps on `i32` overflow and division truncates toward
    /// zero, so `i32::MIN / -1` yields `i32::MIN`. Only a zero divisor fails.
    pub fn apply(&self, a: i32, b: i32) -> Result<i32, ColorError> {
        self.apply_on(a, b, None)
    }

    fn apply_on(
        &self,
        a: i32,
        b: i32,
        channel: Option<&'static str>,
    ) -> Result<i32, ColorError> {
        match self {
            Operator::Add => Ok(a.wrapping_add(b)),
            Operator::Sub => Ok(a.wrapping_sub(b)),
            Operator::Mul => Ok(a.wrapping_mul(b)),
            Operator::Div if b == 0 => Err(ColorError::DivisionByZero { channel }),
            Operator::Div => Ok(a.wrapping_div(b)),
        }
    }
}

impl FromStr for Operator {
    type Err = ColorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "add" => Ok(Operator::Add),
            "sub" => Ok(Operator::Sub),
            "mul" => Ok(Operator::Mul),
            "div" => Ok(Operator::Div),
            other => Err(ColorError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Blend
// ---------------------------------------------------------------------------

/// Per-channel operator results at full `i32` width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blend {
    pub red: i32,
    pub blue: i32,
    pub green: i32,
}

impl Blend {
    pub fn total(&self) -> i32 {
        self.red.wrapping_add(self.blue).wrapping_add(self.green)
    }
}

/// How a negative channel sum is turned into a table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// Truncating remainder; a negative remainder is an out-of-range index
    /// and fails with [`ColorError::EmotionIndexOutOfRange`].
    #[default]
    Strict,
    /// Euclidean remainder, always in `0..7`.
    Wrap,
}

impl FromStr for IndexPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(IndexPolicy::Strict),
            "wrap" => Ok(IndexPolicy::Wrap),
            other => Err(format!("unknown index policy '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Stateless emotion calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionEngine {
    policy: IndexPolicy,
}

impl EmotionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: IndexPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }

    /// Apply `op` channel by channel, red then blue then green.
    pub fn blend(&self, op: Operator, c1: &Rgb, c2: &Rgb) -> Result<Blend, ColorError> {
        Ok(Blend {
            red: op.apply_on(c1.red.into(), c2.red.into(), Some("red"))?,
            blue: op.apply_on(c1.blue.into(), c2.blue.into(), Some("blue"))?,
            green: op.apply_on(c1.green.into(), c2.green.into(), Some("green"))?,
        })
    }

    /// Reduce a channel sum to an emotion.
    pub fn emotion_for(&self, total: i32) -> Result<Emotion, ColorError> {
        let len = Emotion::ALL.len();
        let index = match self.policy {
            IndexPolicy::Strict => total % len as i32,
            IndexPolicy::Wrap => total.rem_euclid(len as i32),
        };
        usize::try_from(index)
            .ok()
            .and_then(Emotion::from_index)
            .ok_or(ColorError::EmotionIndexOutOfRange { index, len })
    }

    /// Derive the emotion for `op_name` applied to two hex colors.
    ///
    /// The operator is resolved before either color is parsed.
    pub fn compute_emotion(
        &self,
        op_name: &str,
        color1: &str,
        color2: &str,
    ) -> Result<Emotion, ColorError> {
        let op: Operator = op_name.parse()?;
        let rgb1 = codec::parse(color1)?;
        let rgb2 = codec::parse(color2)?;
        let blend = self.blend(op, &rgb1, &rgb2)?;
        let emotion = self.emotion_for(blend.total())?;

        tracing::trace!(
            op = %op,
            color1,
            color2,
            total = blend.total(),
            emotion = %emotion,
            "Computed emotion"
        );
        Ok(emotion)
    }
}
