use serde::Serialize;

/// Unit of a measure, rendered as a short canonical code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    /// Plain counts.
    #[serde(rename = "1")]
    Dimensionless,
    #[serde(rename = "By")]
    Bytes,
    #[serde(rename = "ms")]
    Milliseconds,
}

impl Unit {
    /// Canonical unit code (`"1"`, `"By"`, `"ms"`).
    pub const fn code(self) -> &'static str {
        match self {
            Unit::Dimensionless => "1",
            Unit::Bytes => "By",
            Unit::Milliseconds => "ms",
        }
    }
}

/// Numeric type a measure is recorded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Int64,
    Float64,
}

/// A named, unit-typed quantity.
///
/// Measures are plain data and are usually declared as `const` items.
/// The name is the key aggregations are bound to, so it must never be
/// reused for a different unit or meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Measure {
    name: &'static str,
    description: &'static str,
    unit: Unit,
    kind: ValueKind,
}

impl Measure {
    /// Declare an integer measure.
    pub const fn int64(name: &'static str, description: &'static str, unit: Unit) -> Self {
        Self { name, description, unit, kind: ValueKind::Int64 }
    }

    /// Declare a floating point measure.
    pub const fn float64(name: &'static str, description: &'static str, unit: Unit) -> Self {
        Self { name, description, unit, kind: ValueKind::Float64 }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn description(&self) -> &'static str {
        self.description
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }

    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Pair an integer value with this measure. No range checks are applied.
    pub fn int(&self, v: i64) -> Measurement {
        Measurement { measure: *self, value: v as f64 }
    }

    /// Pair a floating point value with this measure.
    pub fn float(&self, v: f64) -> Measurement {
        Measurement { measure: *self, value: v }
    }
}

/// A single value recorded against a measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    measure: Measure,
    value: f64,
}

impl Measurement {
    pub fn measure(&self) -> &Measure {
        &self.measure
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
